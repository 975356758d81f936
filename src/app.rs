use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::application::{coordinator_handle, with_coordinator};
use crate::domain::{
    logging::{LogComponent, get_logger},
    navigation::{NavigationIntent, publish_intent},
    portfolio::{
        Holding, Movement, MovementKind, Portfolio, PortfolioStats, PricePoint, TickerMatch,
        UserWithPortfolios,
    },
    routing::{PageRouter, PortfolioPane},
    session::{Page, Theme},
};
use crate::global_state::{globals, search_results_signal, session_signal, users_signal};
use crate::infrastructure::http::dto::RecordMovementRequest;

const NAV_ITEMS: [(Page, &str); 5] = [
    (Page::Overview, "Overview"),
    (Page::PortfolioDetail, "Portfolio"),
    (Page::Markets, "Markets"),
    (Page::Watchlist, "Watchlist"),
    (Page::AssetDetail, "Assets"),
];

/// Placeholder market heat map shown on the overview, pending a live feed.
const HEATMAP_TILES: [(&str, f64); 8] = [
    ("AMXB", 1.8),
    ("WALMEX", 3.2),
    ("GFNORTEO", -0.6),
    ("FEMSA", 0.9),
    ("CEMEX", 2.4),
    ("KIMBERA", -1.2),
    ("GRUMAB", 0.4),
    ("ALSEA", -2.1),
];

const WATCHLIST_TICKERS: [&str; 5] = ["WALMEX", "AMXB", "FEMSA", "GFNORTEO", "CEMEX"];

/// 🦀 Root component of the portfolio shell
#[component]
pub fn App() -> impl IntoView {
    // Bridge committed session state into the reactive layer
    if let Some(coordinator) = coordinator_handle() {
        coordinator.session().subscribe(|state| globals().session.set(state.clone()));
        globals().session.set(coordinator.session().state());
    }

    // Initial authoritative fetch + reconciliation of the remembered selection
    spawn_local(async {
        load_users().await;
    });

    // Keep the document body class in sync with the persisted theme
    create_effect(move |_| {
        let theme = globals().session.with(|s| s.theme);
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            body.set_class_name(theme.body_class());
        }
    });

    let page = create_memo(move |_| globals().session.with(|s| s.active_page));

    view! {
        <style>
            {r#"
            .app {
                font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
                min-height: 100vh;
                padding: 16px;
            }

            .theme-light .app { background: #f4f6f8; color: #1d2733; }
            .theme-dark .app { background: #121a24; color: #e8edf2; }

            .header {
                display: flex;
                align-items: center;
                gap: 16px;
                flex-wrap: wrap;
                padding: 12px 16px;
                border-radius: 12px;
                margin-bottom: 16px;
            }
            .theme-light .header { background: #ffffff; box-shadow: 0 1px 4px rgba(0,0,0,0.08); }
            .theme-dark .header { background: #1b2634; }

            .brand { font-size: 18px; margin: 0; white-space: nowrap; }

            .nav { display: flex; gap: 4px; }
            .nav-item {
                border: none;
                background: transparent;
                color: inherit;
                padding: 6px 12px;
                border-radius: 8px;
                cursor: pointer;
            }
            .nav-item.active { background: #2d6cdf; color: #ffffff; }

            .search { position: relative; }
            .search input { padding: 6px 10px; border-radius: 8px; border: 1px solid #8899aa55; }
            .search-results {
                position: absolute;
                top: 110%;
                left: 0;
                min-width: 260px;
                z-index: 100;
                display: flex;
                flex-direction: column;
                border-radius: 8px;
                overflow: hidden;
            }
            .theme-light .search-results { background: #ffffff; box-shadow: 0 4px 12px rgba(0,0,0,0.15); }
            .theme-dark .search-results { background: #223042; }
            .search-hit {
                display: flex;
                justify-content: space-between;
                gap: 12px;
                border: none;
                background: transparent;
                color: inherit;
                padding: 8px 10px;
                cursor: pointer;
                text-align: left;
            }
            .search-hit:hover { background: #2d6cdf22; }
            .hit-ticker { font-weight: 700; }

            .user-bubble { display: flex; gap: 8px; align-items: center; margin-left: auto; }
            .user-bubble select { padding: 5px 8px; border-radius: 8px; }
            .bubble-btn, .theme-toggle, .reset-btn {
                border: none;
                border-radius: 8px;
                padding: 6px 10px;
                cursor: pointer;
                background: #2d6cdf;
                color: #ffffff;
            }
            .reset-btn { background: #8899aa; }

            .page { padding: 8px; }
            .heatmap { display: grid; grid-template-columns: repeat(4, 1fr); gap: 8px; max-width: 640px; }
            .tile {
                border: none;
                border-radius: 10px;
                padding: 18px 10px;
                cursor: pointer;
                color: #ffffff;
                font-weight: 600;
            }
            .tile.up { background: #1f8a4c; }
            .tile.down { background: #c0392b; }

            .data-table { border-collapse: collapse; min-width: 420px; }
            .data-table th, .data-table td { padding: 6px 12px; text-align: left; border-bottom: 1px solid #8899aa33; }
            .row-link { cursor: pointer; }
            .row-link:hover { background: #2d6cdf18; }

            .selection-prompt { opacity: 0.75; padding: 32px; text-align: center; }
            .fetch-error { color: #c0392b; padding: 8px 0; }
            .muted { opacity: 0.6; }
            .stats-row { display: flex; gap: 24px; margin: 12px 0; }

            .modal-backdrop {
                position: fixed;
                inset: 0;
                background: rgba(0, 0, 0, 0.45);
                display: flex;
                align-items: center;
                justify-content: center;
                z-index: 200;
            }
            .modal {
                border-radius: 12px;
                padding: 20px;
                min-width: 320px;
                display: flex;
                flex-direction: column;
                gap: 10px;
            }
            .theme-light .modal { background: #ffffff; }
            .theme-dark .modal { background: #1b2634; }
            .modal input { padding: 6px 10px; border-radius: 8px; border: 1px solid #8899aa55; }
            .modal-actions { display: flex; justify-content: flex-end; gap: 8px; }
            "#}
        </style>
        <div class="app">
            <Header />
            <main class="main-container">{move || active_page_view(page.get())}</main>
            <CreateUserModal />
            <CreatePortfolioModal />
        </div>
    }
}

fn active_page_view(page: Page) -> View {
    match page {
        Page::Overview => view! { <OverviewPage /> }.into_view(),
        Page::PortfolioDetail => view! { <PortfolioDetailPage /> }.into_view(),
        Page::Markets => view! { <MarketsPage /> }.into_view(),
        Page::Watchlist => view! { <WatchlistPage /> }.into_view(),
        Page::AssetDetail => view! { <AssetDetailPage /> }.into_view(),
    }
}

/// Fetch the user list and reconcile the remembered selection against it.
/// Failures stay local to this region; the session keeps its last value.
async fn load_users() {
    let Some(coordinator) = coordinator_handle() else {
        return;
    };
    globals().users_loading.set(true);
    globals().users_error.set(None);
    match coordinator.refresh_users().await {
        Ok(users) => globals().users.set(users),
        Err(e) => {
            get_logger().error(
                LogComponent::Presentation("App"),
                &format!("❌ user fetch failed: {e}"),
            );
            globals().users_error.set(Some(e.to_string()));
        }
    }
    globals().users_loading.set(false);
}

/// 📊 Top bar: navigation, ticker search, user/portfolio selection, theme
#[component]
fn Header() -> impl IntoView {
    let session = session_signal();

    let has_prefs = move || {
        session.with(|_| ());
        with_coordinator(|c| c.session().has_any_saved_preferences()).unwrap_or(false)
    };

    view! {
        <header class="header">
            <h1 class="brand">"📈 Portfolio Shell"</h1>
            <nav class="nav">
                {NAV_ITEMS
                    .iter()
                    .map(|(page, label)| {
                        let page = *page;
                        view! {
                            <button
                                class="nav-item"
                                class:active=move || session.with(|s| s.active_page == page)
                                on:click=move |_| {
                                    with_coordinator(|c| c.router().navigate_to(page));
                                }
                            >
                                {*label}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <TickerSearch />
            <UserBubble />
            <button
                class="theme-toggle"
                on:click=move |_| {
                    with_coordinator(|c| c.toggle_theme());
                }
            >
                {move || session.with(|s| match s.theme {
                    Theme::Light => "🌙",
                    Theme::Dark => "☀️",
                })}
            </button>
            <Show when=has_prefs fallback=|| ()>
                <button
                    class="reset-btn"
                    on:click=move |_| {
                        with_coordinator(|c| c.session().reset_all_preferences());
                    }
                >
                    "Reset preferences"
                </button>
            </Show>
        </header>
    }
}

/// 🔍 Debounced ticker search; results are transient and never persisted
#[component]
fn TickerSearch() -> impl IntoView {
    let results = search_results_signal();

    let on_input = move |ev: web_sys::Event| {
        let term = event_target_value(&ev);
        globals().search_term.set(term.clone());
        if term.trim().len() < 2 {
            results.set(Vec::new());
            return;
        }
        spawn_local(async move {
            // Debounce: only the latest term survives the delay
            TimeoutFuture::new(300).await;
            if globals().search_term.get_untracked() != term {
                return;
            }
            let Some(coordinator) = coordinator_handle() else {
                return;
            };
            match coordinator.api().search_tickers(term.trim()).await {
                Ok(hits) => results.set(hits),
                Err(e) => {
                    get_logger().warn(
                        LogComponent::Presentation("Search"),
                        &format!("search failed: {e}"),
                    );
                    results.set(Vec::new());
                }
            }
        });
    };

    view! {
        <div class="search">
            <input
                type="text"
                placeholder="Search tickers…"
                prop:value=move || globals().search_term.get()
                on:input=on_input
            />
            <div class="search-results">
                <For
                    each=move || results.get()
                    key=|hit| hit.ticker.value().to_string()
                    children=move |hit: TickerMatch| {
                        let ticker = hit.ticker.clone();
                        view! {
                            <button
                                class="search-hit"
                                on:click=move |_| {
                                    publish_intent(NavigationIntent::OpenAsset {
                                        ticker: ticker.clone(),
                                    });
                                    globals().search_term.set(String::new());
                                    search_results_signal().set(Vec::new());
                                }
                            >
                                <span class="hit-ticker">{hit.ticker.value().to_string()}</span>
                                <span class="hit-name">{hit.company_name.clone()}</span>
                            </button>
                        }
                    }
                />
            </div>
        </div>
    }
}

/// 👤 User and portfolio pickers plus the create-affordances
#[component]
fn UserBubble() -> impl IntoView {
    let session = session_signal();
    let users = users_signal();

    let current_portfolios = move || {
        let current_user_id = session.with(|s| s.current_user.as_ref().map(|u| u.id));
        users.with(|list| {
            list.iter()
                .find(|u| Some(u.id) == current_user_id)
                .map(|u| u.portfolios.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="user-bubble">
            <select
                class="user-select"
                prop:value=move || {
                    session.with(|s| {
                        s.current_user.as_ref().map(|u| u.id.to_string()).unwrap_or_default()
                    })
                }
                on:change=move |ev| {
                    if let Ok(id) = event_target_value(&ev).parse::<i32>() {
                        let selected = users.get_untracked().into_iter().find(|u| u.id == id);
                        if let Some(user) = selected {
                            with_coordinator(|c| c.select_user(&user));
                        }
                    }
                }
            >
                <For
                    each=move || users.get()
                    key=|user| user.id
                    children=move |user: UserWithPortfolios| {
                        view! { <option value=user.id.to_string()>{user.display_name.clone()}</option> }
                    }
                />
            </select>
            <select
                class="portfolio-select"
                prop:value=move || {
                    session.with(|s| {
                        s.current_portfolio.as_ref().map(|p| p.id.to_string()).unwrap_or_default()
                    })
                }
                on:change=move |ev| {
                    if let Ok(id) = event_target_value(&ev).parse::<i32>() {
                        let selected: Option<Portfolio> =
                            current_portfolios().into_iter().find(|p| p.id == id);
                        if let Some(portfolio) = selected {
                            with_coordinator(|c| c.select_portfolio(&portfolio));
                        }
                    }
                }
            >
                <For
                    each=current_portfolios
                    key=|portfolio| portfolio.id
                    children=move |portfolio: Portfolio| {
                        view! { <option value=portfolio.id.to_string()>{portfolio.name.clone()}</option> }
                    }
                />
            </select>
            <button class="bubble-btn" on:click=move |_| globals().show_create_user_modal.set(true)>
                "+ User"
            </button>
            <button
                class="bubble-btn"
                on:click=move |_| globals().show_create_portfolio_modal.set(true)
            >
                "+ Portfolio"
            </button>
        </div>
    }
}

/// 🗺️ Overview: market heat map plus quick access to every portfolio.
/// Tiles publish navigation intents; this page has no reference to the router.
#[component]
fn OverviewPage() -> impl IntoView {
    let users = users_signal();

    view! {
        <section class="page overview">
            <h2>"Market heat map"</h2>
            <div class="heatmap">
                {HEATMAP_TILES
                    .iter()
                    .map(|(symbol, change)| {
                        let symbol = *symbol;
                        let change = *change;
                        view! {
                            <button
                                class="tile"
                                class:up=move || change >= 0.0
                                class:down=move || change < 0.0
                                on:click=move |_| {
                                    publish_intent(NavigationIntent::OpenAsset {
                                        ticker: symbol.into(),
                                    });
                                }
                            >
                                <div>{symbol}</div>
                                <div>{format!("{change:+.1}%")}</div>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <h2>"Portfolios"</h2>
            {move || {
                globals().users_error.get().map(|e| view! { <div class="fetch-error">{e}</div> })
            }}
            <For
                each=move || users.get()
                key=|user| user.id
                children=move |user: UserWithPortfolios| {
                    let owner_id = user.id;
                    let owner_name = user.display_name.clone();
                    view! {
                        <div class="portfolio-list">
                            <h3>{user.display_name.clone()}</h3>
                            {user
                                .portfolios
                                .iter()
                                .map(|portfolio| {
                                    let portfolio_id = portfolio.id;
                                    let portfolio_name = portfolio.name.clone();
                                    let owner_name = owner_name.clone();
                                    view! {
                                        <button
                                            class="bubble-btn"
                                            on:click=move |_| {
                                                publish_intent(NavigationIntent::OpenPortfolio {
                                                    owner_user_id: owner_id,
                                                    portfolio_id,
                                                    owner_display_name: owner_name.clone(),
                                                    portfolio_name: portfolio_name.clone(),
                                                });
                                            }
                                        >
                                            {portfolio.name.clone()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                }
            />
        </section>
    }
}

/// 💼 Portfolio detail respecting the explicit-target precedence
#[component]
fn PortfolioDetailPage() -> impl IntoView {
    let session = session_signal();
    let pane = create_memo(move |_| session.with(PageRouter::resolve_portfolio_pane));

    view! {
        {move || match pane.get() {
            PortfolioPane::SelectionPrompt => view! {
                <div class="selection-prompt">
                    <p>"Pick a user and a portfolio to see its detail."</p>
                </div>
            }
                .into_view(),
            PortfolioPane::Portfolio { portfolio_id, owner_name, portfolio_name, .. } => view! {
                <PortfolioSummary portfolio_id owner_name portfolio_name />
            }
                .into_view(),
        }}
    }
}

#[component]
fn PortfolioSummary(portfolio_id: i32, owner_name: String, portfolio_name: String) -> impl IntoView {
    let (holdings, set_holdings) = create_signal::<Vec<Holding>>(Vec::new());
    let (stats, set_stats) = create_signal::<Option<PortfolioStats>>(None);
    let (movements, set_movements) = create_signal::<Vec<Movement>>(Vec::new());
    let (error, set_error) = create_signal::<Option<String>>(None);
    // Bumped after a recorded movement to refetch the figures
    let (version, set_version) = create_signal(0u32);

    create_effect(move |_| {
        version.get();
        spawn_local(async move {
            let Some(coordinator) = coordinator_handle() else {
                return;
            };
            match coordinator.api().holdings(portfolio_id).await {
                Ok(rows) => set_holdings.set(rows),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            match coordinator.api().portfolio_stats(portfolio_id).await {
                Ok(summary) => set_stats.set(Some(summary)),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            match coordinator.api().transactions(portfolio_id).await {
                Ok(rows) => set_movements.set(rows),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    });

    let on_recorded = move || set_version.update(|v| *v += 1);

    view! {
        <section class="page portfolio-detail">
            <h2>{format!("{portfolio_name} · {owner_name}")}</h2>
            {move || error.get().map(|e| view! { <div class="fetch-error">{e}</div> })}
            <div class="stats-row">
                {move || {
                    stats
                        .get()
                        .map(|s| {
                            view! {
                                <span>{format!("Value ${:.2}", s.total_value)}</span>
                                <span>{format!("Cost ${:.2}", s.total_cost)}</span>
                                <span>
                                    {format!("P/L ${:.2} ({:+.2}%)", s.gain_absolute, s.gain_percent)}
                                </span>
                            }
                        })
                }}
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Ticker"</th>
                        <th>"Qty"</th>
                        <th>"Avg price"</th>
                        <th>"Market value"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || holdings.get()
                        key=|row| row.ticker.value().to_string()
                        children=move |row: Holding| {
                            let ticker = row.ticker.clone();
                            view! {
                                <tr
                                    class="row-link"
                                    on:click=move |_| {
                                        publish_intent(NavigationIntent::OpenAsset {
                                            ticker: ticker.clone(),
                                        });
                                    }
                                >
                                    <td>{row.ticker.value().to_string()}</td>
                                    <td>{format!("{:.2}", row.quantity)}</td>
                                    <td>{format!("${:.2}", row.average_price)}</td>
                                    <td>{format!("${:.2}", row.market_value)}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <h3>"Movements"</h3>
            <MovementForm portfolio_id on_recorded />
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Ticker"</th>
                        <th>"Kind"</th>
                        <th>"Qty"</th>
                        <th>"Price"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || movements.get()
                        key=|row| row.id
                        children=move |row: Movement| {
                            view! {
                                <tr>
                                    <td>{row.ticker.value().to_string()}</td>
                                    <td>{row.kind.to_string()}</td>
                                    <td>{format!("{:.2}", row.quantity)}</td>
                                    <td>{format!("${:.2}", row.price)}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}

/// Inline form recording a buy/sell/deposit against the shown portfolio
#[component]
fn MovementForm<F>(portfolio_id: i32, on_recorded: F) -> impl IntoView
where
    F: Fn() + Copy + 'static,
{
    let (ticker, set_ticker) = create_signal(String::new());
    let (kind, set_kind) = create_signal(MovementKind::Buy);
    let (quantity, set_quantity) = create_signal(String::new());
    let (price, set_price) = create_signal(String::new());
    let (error, set_error) = create_signal::<Option<String>>(None);

    let submit = move |_| {
        let raw_ticker = ticker.get_untracked();
        let (Ok(quantity_value), Ok(price_value)) =
            (quantity.get_untracked().parse::<f64>(), price.get_untracked().parse::<f64>())
        else {
            set_error.set(Some("Quantity and price must be numbers".to_string()));
            return;
        };
        if raw_ticker.trim().is_empty() {
            set_error.set(Some("Ticker is required".to_string()));
            return;
        }
        let request = RecordMovementRequest {
            ticker: raw_ticker.trim().to_uppercase(),
            kind: kind.get_untracked(),
            quantity: quantity_value,
            price: price_value,
        };
        spawn_local(async move {
            let Some(coordinator) = coordinator_handle() else {
                return;
            };
            match coordinator.api().record_movement(portfolio_id, &request).await {
                Ok(_) => {
                    set_ticker.set(String::new());
                    set_quantity.set(String::new());
                    set_price.set(String::new());
                    set_error.set(None);
                    on_recorded();
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="movement-form">
            <input
                type="text"
                placeholder="Ticker"
                prop:value=move || ticker.get()
                on:input=move |ev| set_ticker.set(event_target_value(&ev))
            />
            <select on:change=move |ev| {
                let parsed = event_target_value(&ev).parse::<MovementKind>();
                set_kind.set(parsed.unwrap_or(MovementKind::Buy));
            }>
                <option value="buy">"Buy"</option>
                <option value="sell">"Sell"</option>
                <option value="deposit">"Deposit"</option>
            </select>
            <input
                type="text"
                placeholder="Qty"
                prop:value=move || quantity.get()
                on:input=move |ev| set_quantity.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Price"
                prop:value=move || price.get()
                on:input=move |ev| set_price.set(event_target_value(&ev))
            />
            <button class="bubble-btn" on:click=submit>
                "Record"
            </button>
            {move || error.get().map(|e| view! { <div class="fetch-error">{e}</div> })}
        </div>
    }
}

/// 📈 Markets table; rows navigate through the bus like every other widget
#[component]
fn MarketsPage() -> impl IntoView {
    view! {
        <section class="page markets">
            <h2>"Markets"</h2>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Symbol"</th>
                        <th>"Change"</th>
                    </tr>
                </thead>
                <tbody>
                    {HEATMAP_TILES
                        .iter()
                        .map(|(symbol, change)| {
                            let symbol = *symbol;
                            let change = *change;
                            view! {
                                <tr
                                    class="row-link"
                                    on:click=move |_| {
                                        publish_intent(NavigationIntent::OpenAsset {
                                            ticker: symbol.into(),
                                        });
                                    }
                                >
                                    <td>{symbol}</td>
                                    <td>{format!("{change:+.1}%")}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </section>
    }
}

/// ⭐ Watchlist
#[component]
fn WatchlistPage() -> impl IntoView {
    view! {
        <section class="page watchlist">
            <h2>"Watchlist"</h2>
            <table class="data-table">
                <tbody>
                    {WATCHLIST_TICKERS
                        .iter()
                        .map(|symbol| {
                            let symbol = *symbol;
                            view! {
                                <tr
                                    class="row-link"
                                    on:click=move |_| {
                                        publish_intent(NavigationIntent::OpenAsset {
                                            ticker: symbol.into(),
                                        });
                                    }
                                >
                                    <td>{symbol}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </section>
    }
}

/// 🔎 Single-asset detail for the currently selected ticker
#[component]
fn AssetDetailPage() -> impl IntoView {
    let session = session_signal();
    let (points, set_points) = create_signal::<Vec<PricePoint>>(Vec::new());
    let (error, set_error) = create_signal::<Option<String>>(None);

    // Memoized so unrelated session patches do not refetch the series
    let ticker_memo = create_memo(move |_| session.with(|s| s.selected_ticker.clone()));
    create_effect(move |_| {
        let ticker = ticker_memo.get();
        spawn_local(async move {
            let Some(coordinator) = coordinator_handle() else {
                return;
            };
            match coordinator.api().price_history(&ticker).await {
                Ok(series) => {
                    set_error.set(None);
                    set_points.set(series);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    });

    view! {
        <section class="page asset-detail">
            <h2>{move || session.with(|s| s.selected_ticker.value().to_string())}</h2>
            {move || error.get().map(|e| view! { <div class="fetch-error">{e}</div> })}
            <div class="stats-row">
                <span>
                    {move || {
                        points.with(|p| {
                            p.last().map(|pt| format!("${:.2}", pt.price)).unwrap_or_else(|| "–".into())
                        })
                    }}
                </span>
                <span class="muted">
                    {move || format!("{} history points", points.with(|p| p.len()))}
                </span>
            </div>
        </section>
    }
}

/// ➕ Create-user modal; on success the user list is re-fetched and
/// reconciliation runs again
#[component]
fn CreateUserModal() -> impl IntoView {
    let visible = globals().show_create_user_modal;
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (error, set_error) = create_signal::<Option<String>>(None);

    let submit = move |_| {
        let display_name = name.get_untracked();
        if display_name.trim().is_empty() {
            return;
        }
        let email_value = {
            let raw = email.get_untracked();
            if raw.trim().is_empty() { None } else { Some(raw.trim().to_string()) }
        };
        spawn_local(async move {
            let Some(coordinator) = coordinator_handle() else {
                return;
            };
            match coordinator.create_user(display_name.trim(), email_value).await {
                Ok(users) => {
                    globals().users.set(users);
                    globals().show_create_user_modal.set(false);
                    set_name.set(String::new());
                    set_email.set(String::new());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <Show when=move || visible.get() fallback=|| ()>
            <div class="modal-backdrop">
                <div class="modal">
                    <h3>"New user"</h3>
                    <input
                        type="text"
                        placeholder="Display name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Email (optional)"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    {move || error.get().map(|e| view! { <div class="fetch-error">{e}</div> })}
                    <div class="modal-actions">
                        <button
                            class="reset-btn"
                            on:click=move |_| globals().show_create_user_modal.set(false)
                        >
                            "Cancel"
                        </button>
                        <button class="bubble-btn" on:click=submit>
                            "Create"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// ➕ Create-portfolio modal for the current user
#[component]
fn CreatePortfolioModal() -> impl IntoView {
    let session = session_signal();
    let visible = globals().show_create_portfolio_modal;
    let (name, set_name) = create_signal(String::new());
    let (error, set_error) = create_signal::<Option<String>>(None);

    let submit = move |_| {
        let portfolio_name = name.get_untracked();
        if portfolio_name.trim().is_empty() {
            return;
        }
        let Some(owner_user_id) = session.with_untracked(|s| s.current_user.as_ref().map(|u| u.id))
        else {
            set_error.set(Some("Select a user first".to_string()));
            return;
        };
        spawn_local(async move {
            let Some(coordinator) = coordinator_handle() else {
                return;
            };
            match coordinator.create_portfolio(owner_user_id, portfolio_name.trim()).await {
                Ok(users) => {
                    globals().users.set(users);
                    globals().show_create_portfolio_modal.set(false);
                    set_name.set(String::new());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <Show when=move || visible.get() fallback=|| ()>
            <div class="modal-backdrop">
                <div class="modal">
                    <h3>"New portfolio"</h3>
                    <input
                        type="text"
                        placeholder="Portfolio name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    {move || error.get().map(|e| view! { <div class="fetch-error">{e}</div> })}
                    <div class="modal-actions">
                        <button
                            class="reset-btn"
                            on:click=move |_| globals().show_create_portfolio_modal.set(false)
                        >
                            "Cancel"
                        </button>
                        <button class="bubble-btn" on:click=submit>
                            "Create"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

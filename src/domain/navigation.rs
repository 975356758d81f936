use crate::domain::logging::LogComponent;
use crate::domain::portfolio::Ticker;
use crate::domain::session::Page;
use crate::log_debug;
use std::cell::RefCell;

/// A requested view transition, published by any component without a
/// reference to the router.
#[derive(Debug, Clone)]
pub enum NavigationIntent {
    OpenAsset {
        ticker: Ticker,
    },
    OpenPortfolio {
        owner_user_id: i32,
        portfolio_id: i32,
        owner_display_name: String,
        portfolio_name: String,
    },
    OpenPage {
        page: Page,
    },
}

impl NavigationIntent {
    pub fn kind(&self) -> &'static str {
        match self {
            NavigationIntent::OpenAsset { .. } => "OpenAsset",
            NavigationIntent::OpenPortfolio { .. } => "OpenPortfolio",
            NavigationIntent::OpenPage { .. } => "OpenPage",
        }
    }
}

/// Fire-and-forget publish/subscribe channel for navigation intents.
///
/// Delivery is synchronous, at-most-once per publish, to all currently
/// subscribed listeners in subscription order. Intents published before any
/// listener exists are dropped; a publish with zero subscribers is a no-op.
pub struct NavigationBus {
    handlers: RefCell<Vec<Box<dyn Fn(&NavigationIntent)>>>,
}

impl NavigationBus {
    pub fn new() -> Self {
        Self { handlers: RefCell::new(Vec::new()) }
    }

    pub fn subscribe<F>(&self, handler: F)
    where
        F: Fn(&NavigationIntent) + 'static,
    {
        self.handlers.borrow_mut().push(Box::new(handler));
    }

    pub fn publish(&self, intent: NavigationIntent) {
        let handlers = self.handlers.borrow();
        if handlers.is_empty() {
            log_debug!(
                LogComponent::Navigation("Bus"),
                "intent {} published with no subscriber; dropped",
                intent.kind()
            );
            return;
        }
        log_debug!(
            LogComponent::Navigation("Bus"),
            "delivering {} to {} subscriber(s)",
            intent.kind(),
            handlers.len()
        );
        for handler in handlers.iter() {
            handler(&intent);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}

impl Default for NavigationBus {
    fn default() -> Self {
        Self::new()
    }
}

// Process-wide bus instance (thread-local for WASM)
thread_local! {
    static PROCESS_BUS: NavigationBus = NavigationBus::new();
}

/// Publish an intent on the process-wide bus.
pub fn publish_intent(intent: NavigationIntent) {
    PROCESS_BUS.with(|bus| bus.publish(intent));
}

/// Subscribe to the process-wide bus.
pub fn subscribe_navigation<F>(handler: F)
where
    F: Fn(&NavigationIntent) + 'static,
{
    PROCESS_BUS.with(|bus| bus.subscribe(handler));
}

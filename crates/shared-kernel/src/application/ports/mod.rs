mod config_provider;
mod event_dispatcher;

pub use config_provider::ConfigProvider;
pub use event_dispatcher::EventDispatcher;

#[cfg(any(test, feature = "test-utils"))]
mod event_dispatcher_stub;

#[cfg(any(test, feature = "test-utils"))]
pub use event_dispatcher_stub::EventDispatcherStub;

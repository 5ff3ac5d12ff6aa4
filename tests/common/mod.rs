pub mod app;
pub mod factory;
pub mod fake_store;

#[allow(unused_imports)]
pub use app::TestApp;
#[allow(unused_imports)]
pub use factory::Factory;

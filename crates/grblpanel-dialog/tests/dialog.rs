#[path = "dialog/binding.rs"]
mod binding;
#[path = "dialog/facade.rs"]
mod facade;
#[path = "dialog/lifecycle.rs"]
mod lifecycle;
#[path = "dialog/navigation.rs"]
mod navigation;
#[path = "dialog/network_test.rs"]
mod network_test;

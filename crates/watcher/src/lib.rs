pub mod api;
pub mod dedup;
pub mod relay;
pub mod startup;
#[cfg(test)]
mod test_support;
pub mod translator;
pub mod validator;

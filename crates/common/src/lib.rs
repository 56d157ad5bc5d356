//! Shared plumbing for the workspace: logging setup, runtime directory
//! checks and small response types used by the HTTP layer.

pub mod types;
pub mod utils;
pub mod env;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health::ok();
        assert_eq!(h.status, "ok");
    }
}

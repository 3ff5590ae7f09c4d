//! Response wrapper for delete endpoints.

use serde::Serialize;

/// Serializes as the two-element array `[<record>, "deleted"]`.
#[derive(Debug, Serialize)]
pub struct Deleted<T>(pub T, pub &'static str);

impl<T: Serialize> Deleted<T> {
    pub fn new(item: T) -> Self {
        Self(item, "deleted")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deleted_shape() {
        let value = serde_json::to_value(Deleted::new(json!({"id": 1}))).unwrap();
        assert_eq!(value, json!([{"id": 1}, "deleted"]));
    }
}

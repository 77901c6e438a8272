/// Input class for a field given its current validation error.
pub fn field_class(error: &Option<String>) -> &'static str {
    if error.is_some() {
        "input-field input-invalid"
    } else {
        "input-field"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_class_reflects_error_presence() {
        assert_eq!(field_class(&None), "input-field");
        assert_eq!(
            field_class(&Some("Name is required".to_string())),
            "input-field input-invalid"
        );
    }
}

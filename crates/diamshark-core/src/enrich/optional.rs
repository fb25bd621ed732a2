pub(crate) fn optional_nonzero_u32(value: u32) -> Option<u32> {
    if value == 0 { None } else { Some(value) }
}

pub(crate) fn optional_non_empty(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    if value.is_empty() { None } else { Some(value) }
}

#[cfg(test)]
mod tests {
    use super::{optional_non_empty, optional_nonzero_u32};

    #[test]
    fn optional_nonzero_u32_zero() {
        assert_eq!(optional_nonzero_u32(0), None);
    }

    #[test]
    fn optional_nonzero_u32_value() {
        assert_eq!(optional_nonzero_u32(10415), Some(10415));
    }

    #[test]
    fn optional_non_empty_strings() {
        assert_eq!(optional_non_empty(""), None);
        assert_eq!(optional_non_empty("R|P"), Some("R|P".to_string()));
    }
}

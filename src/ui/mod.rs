pub mod components;
pub mod format;
pub mod pages;
pub mod shell;

/// `base` plus its `--modifier` variant when `on`.
pub fn modifier_class(base: &str, modifier: &str, on: bool) -> String {
    if on {
        format!("{base} {base}--{modifier}")
    } else {
        base.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::modifier_class;

    #[test]
    fn modifier_only_when_on() {
        assert_eq!(modifier_class("nav-btn", "active", true), "nav-btn nav-btn--active");
        assert_eq!(modifier_class("nav-btn", "active", false), "nav-btn");
    }
}

use dioxus::prelude::*;

/// The two states a status indicator can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Ok,
    NotOk,
}

impl Indicator {
    /// Only an explicit `true` is OK; `false` and absence are not.
    pub fn from_flag(flag: Option<bool>) -> Self {
        if flag == Some(true) {
            Indicator::Ok
        } else {
            Indicator::NotOk
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Indicator::Ok => "OK",
            Indicator::NotOk => "Not OK",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Indicator::Ok => "OkStatus",
            Indicator::NotOk => "NotOkStatus",
        }
    }

    fn dot_class(&self) -> &'static str {
        match self {
            Indicator::Ok => "bg-green-500",
            Indicator::NotOk => "bg-red-500",
        }
    }
}

#[component]
pub fn StatusIndicator(#[props(!optional)] ok: Option<bool>) -> Element {
    let indicator = Indicator::from_flag(ok);
    let label = indicator.label();

    rsx! {
      span { class: "flex items-center gap-2",
        span { class: format!("w-2 h-2 rounded-full {}", indicator.dot_class()) }
        span { class: indicator.class(), "{label}" }
      }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_true_is_ok() {
        assert_eq!(Indicator::from_flag(Some(true)), Indicator::Ok);
        assert_eq!(Indicator::from_flag(Some(false)), Indicator::NotOk);
        assert_eq!(Indicator::from_flag(None), Indicator::NotOk);
    }

    #[test]
    fn labels_and_classes() {
        assert_eq!(Indicator::Ok.label(), "OK");
        assert_eq!(Indicator::Ok.class(), "OkStatus");
        assert_eq!(Indicator::NotOk.label(), "Not OK");
        assert_eq!(Indicator::NotOk.class(), "NotOkStatus");
    }
}

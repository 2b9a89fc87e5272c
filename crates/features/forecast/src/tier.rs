use crate::estimator::RiskLevel;
use sledger_derive::api_model;

/// Colour role used to render a risk level.
#[api_model]
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Danger,
}

#[api_model(rename_all = "kebab-case")]
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    CheckCircle,
    Clock,
    AlertTriangle,
}

/// Presentation of a [`RiskLevel`].
#[api_model]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Tier {
    pub tone: Tone,
    pub icon: Icon,
}

impl RiskLevel {
    #[must_use]
    pub const fn tier(self) -> Tier {
        match self {
            Self::Low => Tier { tone: Tone::Success, icon: Icon::CheckCircle },
            Self::Medium => Tier { tone: Tone::Warning, icon: Icon::Clock },
            Self::High => Tier { tone: Tone::Danger, icon: Icon::AlertTriangle },
        }
    }
}

//! Lifecycle states and the transition table.

use crate::error::ParseStateError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Where an order sits in its lifecycle.
///
/// ```text
/// Created -> Confirmed -> Preparing -> Ready -> Served -> Refunded
///    |           |                       |
///    +-----------+---------> Cancelled <-+
/// ```
///
/// `Cancelled` and `Refunded` are terminal; orders in them are kept for audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderState {
    Created,
    Confirmed,
    Preparing,
    Ready,
    Served,
    Cancelled,
    Refunded,
}

impl OrderState {
    /// The state every order starts in.
    pub const INITIAL: OrderState = OrderState::Created;

    pub const ALL: [OrderState; 7] = [
        OrderState::Created,
        OrderState::Confirmed,
        OrderState::Preparing,
        OrderState::Ready,
        OrderState::Served,
        OrderState::Cancelled,
        OrderState::Refunded,
    ];

    /// States reachable from `self` in a single step.
    pub fn allowed_next(self) -> &'static [OrderState] {
        use OrderState::*;
        match self {
            Created => &[Confirmed, Cancelled],
            Confirmed => &[Preparing, Cancelled],
            Preparing => &[Ready],
            Ready => &[Served, Cancelled],
            Served => &[Refunded],
            Cancelled | Refunded => &[],
        }
    }

    pub fn can_transition_to(self, target: OrderState) -> bool {
        self.allowed_next().contains(&target)
    }

    pub fn is_terminal(self) -> bool {
        self.allowed_next().is_empty()
    }

    pub fn is_initial(self) -> bool {
        self == Self::INITIAL
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderState::Created => "Created",
            OrderState::Confirmed => "Confirmed",
            OrderState::Preparing => "Preparing",
            OrderState::Ready => "Ready",
            OrderState::Served => "Served",
            OrderState::Cancelled => "Cancelled",
            OrderState::Refunded => "Refunded",
        }
    }
}

impl Display for OrderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderState {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| ParseStateError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use OrderState::*;

    #[test]
    fn test_transition_table() {
        let allowed = [
            (Created, Confirmed),
            (Created, Cancelled),
            (Confirmed, Preparing),
            (Confirmed, Cancelled),
            (Preparing, Ready),
            (Ready, Served),
            (Ready, Cancelled),
            (Served, Refunded),
        ];

        for from in OrderState::ALL {
            for to in OrderState::ALL {
                assert_eq!(
                    from.can_transition_to(to),
                    allowed.contains(&(from, to)),
                    "{from} -> {to}"
                );
            }
        }
    }

    #[test]
    fn test_terminal_states() {
        let terminal: Vec<_> = OrderState::ALL
            .into_iter()
            .filter(|s| s.is_terminal())
            .collect();
        assert_eq!(terminal, vec![Cancelled, Refunded]);
    }

    #[test]
    fn test_preparing_cannot_be_cancelled() {
        assert!(!Preparing.can_transition_to(Cancelled));
    }

    #[test]
    fn test_name_round_trips() {
        for state in OrderState::ALL {
            assert_eq!(state.to_string().parse::<OrderState>(), Ok(state));
        }
    }

    #[test]
    fn test_unknown_name_is_an_error() {
        let err = "Delivered".parse::<OrderState>().unwrap_err();
        assert_eq!(err, ParseStateError("Delivered".to_string()));
    }
}

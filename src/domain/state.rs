use std::fmt;

/// Lifecycle stage of an [`Order`](super::Order).
///
/// The set is closed: every stage handles every [`OrderOperation`], even if
/// only to reject it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderState {
    Created,
    Paid,
    Shipped,
    Delivered,
    Cancelled,
}

/// Operations that drive an order through its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderOperation {
    Pay,
    Ship,
    Deliver,
    Cancel,
}

/// Result of applying an operation to a state.
///
/// A rejection is an ordinary outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Transitioned {
        from: OrderState,
        to: OrderState,
        note: &'static str,
        /// Trailing qualifier, e.g. that a refund is owed.
        detail: Option<&'static str>,
    },
    Rejected {
        state: OrderState,
        operation: OrderOperation,
        reason: &'static str,
    },
}

impl OrderState {
    #[allow(dead_code)]
    pub const ALL: [OrderState; 5] = [
        OrderState::Created,
        OrderState::Paid,
        OrderState::Shipped,
        OrderState::Delivered,
        OrderState::Cancelled,
    ];

    /// Applies `operation` to this state.
    pub fn apply(self, operation: OrderOperation) -> Outcome {
        use OrderOperation::*;
        use OrderState::*;

        let moved = |to, note| Outcome::Transitioned { from: self, to, note, detail: None };
        let refused = |reason| Outcome::Rejected { state: self, operation, reason };

        match (self, operation) {
            (Created, Pay) => moved(Paid, "payment received"),
            (Created, Ship) => refused("cannot ship: payment pending"),
            (Created, Deliver) => refused("cannot deliver: not shipped"),
            (Created, Cancel) => moved(Cancelled, "order cancelled"),

            (Paid, Pay) => refused("already paid"),
            (Paid, Ship) => moved(Shipped, "order shipped"),
            (Paid, Deliver) => refused("cannot deliver: not shipped yet"),
            (Paid, Cancel) => Outcome::Transitioned {
                from: Paid,
                to: Cancelled,
                note: "order cancelled",
                detail: Some("refund required"),
            },

            (Shipped, Pay) => refused("already paid and shipped"),
            (Shipped, Ship) => refused("already shipped"),
            (Shipped, Deliver) => moved(Delivered, "order delivered"),
            (Shipped, Cancel) => refused("cannot cancel: already shipped"),

            (Delivered, Pay) => refused("already completed"),
            (Delivered, Ship) => refused("already delivered"),
            (Delivered, Deliver) => refused("already delivered"),
            (Delivered, Cancel) => refused("cannot cancel: already delivered"),

            (Cancelled, Pay) => refused("cannot pay: order cancelled"),
            (Cancelled, Ship) => refused("cannot ship: order cancelled"),
            (Cancelled, Deliver) => refused("cannot deliver: order cancelled"),
            (Cancelled, Cancel) => refused("already cancelled"),
        }
    }

    /// Successor state for `operation`, or `None` if it would be rejected.
    pub fn next(self, operation: OrderOperation) -> Option<OrderState> {
        match self.apply(operation) {
            Outcome::Transitioned { to, .. } => Some(to),
            Outcome::Rejected { .. } => None,
        }
    }

    /// `Delivered` and `Cancelled` accept no further operations.
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderState::Delivered | OrderState::Cancelled)
    }

    pub fn permitted_operations(self) -> Vec<OrderOperation> {
        OrderOperation::ALL
            .into_iter()
            .filter(|op| self.next(*op).is_some())
            .collect()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderState::Created => "CREATED",
            OrderState::Paid => "PAID",
            OrderState::Shipped => "SHIPPED",
            OrderState::Delivered => "DELIVERED",
            OrderState::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for OrderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl OrderOperation {
    pub const ALL: [OrderOperation; 4] = [
        OrderOperation::Pay,
        OrderOperation::Ship,
        OrderOperation::Deliver,
        OrderOperation::Cancel,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderOperation::Pay => "pay",
            OrderOperation::Ship => "ship",
            OrderOperation::Deliver => "deliver",
            OrderOperation::Cancel => "cancel",
        }
    }
}

impl fmt::Display for OrderOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Outcome {
    pub fn is_transition(&self) -> bool {
        matches!(self, Outcome::Transitioned { .. })
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected { .. })
    }

    /// State the order is in after the operation.
    pub fn state(&self) -> OrderState {
        match self {
            Outcome::Transitioned { to, .. } => *to,
            Outcome::Rejected { state, .. } => *state,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Transitioned { to, note, detail: None, .. } => write!(f, "{}; state -> {}", note, to),
            Outcome::Transitioned { to, note, detail: Some(detail), .. } => {
                write!(f, "{}; state -> {} ({})", note, to, detail)
            }
            Outcome::Rejected { reason, .. } => f.write_str(reason),
        }
    }
}

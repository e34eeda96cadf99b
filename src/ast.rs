use std::fmt;

/// An expression tree node.
///
/// `Expr` is a strict tree: every node exclusively owns its children, and
/// nodes are never mutated after the parser returns them. A single operator
/// becomes a `BinaryOp`; a flat run of two or more operators such as `1+2-3`
/// becomes one `Chain` that is folded left to right, so the depth of a parsed
/// tree only grows with parenthesis nesting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Literal {
        /// The constant value.
        value: i64,
    },
    /// A binary operation (addition or subtraction).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// A left-associative run of operations, e.g. `1 + 2 - 3`.
    Chain {
        /// The leftmost operand.
        first: Box<Self>,
        /// Every following operator paired with its right operand.
        rest:  Vec<(BinaryOperator, Self)>,
    },
}

impl Expr {
    /// Creates a literal node.
    #[must_use]
    pub const fn literal(value: i64) -> Self {
        Self::Literal { value }
    }

    /// Creates a binary operation node from two finished operands.
    ///
    /// ## Example
    /// ```
    /// use parsum::ast::{BinaryOperator, Expr};
    ///
    /// let expr = Expr::binary(Expr::literal(1), BinaryOperator::Add, Expr::literal(2));
    /// assert_eq!(expr.to_string(), "(1 + 2)");
    /// ```
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }

    /// Creates a chain node, or a plain `BinaryOp` when `rest` holds a single
    /// operation, or `first` itself when `rest` is empty.
    ///
    /// ## Example
    /// ```
    /// use parsum::ast::{BinaryOperator, Expr};
    ///
    /// let expr = Expr::chain(Expr::literal(1),
    ///                        vec![(BinaryOperator::Add, Expr::literal(2)),
    ///                             (BinaryOperator::Sub, Expr::literal(3))]);
    /// assert_eq!(expr.to_string(), "((1 + 2) - 3)");
    /// ```
    #[must_use]
    pub fn chain(first: Self, mut rest: Vec<(BinaryOperator, Self)>) -> Self {
        match rest.len() {
            0 => first,
            1 => {
                let (op, right) = rest.remove(0);
                Self::binary(first, op, right)
            },
            _ => Self::Chain { first: Box::new(first),
                               rest },
        }
    }

    /// Counts the nodes of the tree; each operand of a chain counts as its own
    /// subtree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Self::Literal { .. } => 1,
            Self::BinaryOp { left, right, .. } => 1 + left.node_count() + right.node_count(),
            Self::Chain { first, rest } => {
                1 + first.node_count() + rest.iter().map(|(_, e)| e.node_count()).sum::<usize>()
            },
        }
    }

    /// Gets the depth of the tree; a lone literal has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Literal { .. } => 1,
            Self::BinaryOp { left, right, .. } => 1 + left.depth().max(right.depth()),
            Self::Chain { first, rest } => {
                1 + rest.iter().map(|(_, e)| e.depth()).fold(first.depth(), usize::max)
            },
        }
    }
}

/// Tears the tree down with an explicit stack so that dropping a deep
/// hand-built tree does not recurse once per level.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(self, &mut pending);

        while let Some(mut node) = pending.pop() {
            detach_children(&mut node, &mut pending);
        }
    }
}

/// Moves the children of `node` into `pending`, leaving leaves behind.
fn detach_children(node: &mut Expr, pending: &mut Vec<Expr>) {
    match node {
        Expr::Literal { .. } => {},
        Expr::BinaryOp { left, right, .. } => {
            pending.push(std::mem::replace(&mut **left, Expr::literal(0)));
            pending.push(std::mem::replace(&mut **right, Expr::literal(0)));
        },
        Expr::Chain { first, rest } => {
            pending.push(std::mem::replace(&mut **first, Expr::literal(0)));
            pending.extend(std::mem::take(rest).into_iter().map(|(_, operand)| operand));
        },
    }
}

/// Prints the tree fully parenthesized, e.g. `((13 + 4) - (12 + 1))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value } => write!(f, "{value}"),
            Self::BinaryOp { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::Chain { first, rest } => {
                write!(f, "{}{first}", "(".repeat(rest.len()))?;
                for (op, operand) in rest {
                    write!(f, " {op} {operand})")?;
                }
                Ok(())
            },
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
        };
        write!(f, "{operator}")
    }
}

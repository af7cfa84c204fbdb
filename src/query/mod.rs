use std::collections::HashSet;
use std::sync::Arc;

use crate::graph::Atom;

/// Stereochemical constraint accumulated while evaluating a query tree.
/// `None` signals a contradiction between branches, `Any` a stereocenter
/// with no preferred direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chirality {
    Clockwise,
    Anticlockwise,
    Any,
    None,
}

/// Atom-level test at the leaves of a query expression. Leaves are supplied
/// by the query builder; the default `chirality` asserts nothing.
pub trait AtomQuery: Send + Sync {
    fn matches(&self, atom: &Atom) -> bool;

    fn chirality(&self, _atom: &Atom, _marks: &mut HashSet<Chirality>) {}
}

/// Boolean combinator tree over atom predicates. Fixed at construction; the
/// legacy design with a string operator field and settable children is
/// deliberately gone, so a node can never be observed half-built.
#[derive(Clone)]
pub enum QueryExpr {
    Leaf(Arc<dyn AtomQuery>),
    Conjunction(Box<QueryExpr>, Box<QueryExpr>),
    Disjunction(Box<QueryExpr>, Box<QueryExpr>),
    Negation(Box<QueryExpr>),
}

impl QueryExpr {
    pub fn leaf(query: impl AtomQuery + 'static) -> Self {
        QueryExpr::Leaf(Arc::new(query))
    }

    /// Conjunction of the two expressions.
    pub fn and(left: QueryExpr, right: QueryExpr) -> Self {
        QueryExpr::Conjunction(Box::new(left), Box::new(right))
    }

    /// Disjunction of the two expressions.
    pub fn or(left: QueryExpr, right: QueryExpr) -> Self {
        QueryExpr::Disjunction(Box::new(left), Box::new(right))
    }

    /// Negation of the expression.
    pub fn not(expr: QueryExpr) -> Self {
        QueryExpr::Negation(Box::new(expr))
    }
}

impl AtomQuery for QueryExpr {
    fn matches(&self, atom: &Atom) -> bool {
        match self {
            QueryExpr::Leaf(query) => query.matches(atom),
            QueryExpr::Conjunction(left, right) => left.matches(atom) && right.matches(atom),
            QueryExpr::Disjunction(left, right) => left.matches(atom) || right.matches(atom),
            QueryExpr::Negation(expr) => !expr.matches(atom),
        }
    }

    fn chirality(&self, atom: &Atom, marks: &mut HashSet<Chirality>) {
        match self {
            QueryExpr::Leaf(query) => query.chirality(atom, marks),

            QueryExpr::Conjunction(left, right) => {
                // work out each side on its own, then decide whether their
                // constraints agree
                let mut left_marks = HashSet::new();
                let mut right_marks = HashSet::new();
                left.chirality(atom, &mut left_marks);
                right.chirality(atom, &mut right_marks);

                // opposing directions are a contradiction, flagged as None
                if left_marks.contains(&Chirality::Clockwise)
                    && right_marks.contains(&Chirality::Anticlockwise)
                {
                    marks.insert(Chirality::None);
                }
                if left_marks.contains(&Chirality::Anticlockwise)
                    && right_marks.contains(&Chirality::Clockwise)
                {
                    marks.insert(Chirality::None);
                }

                let concrete = [Chirality::Clockwise, Chirality::Anticlockwise]
                    .iter()
                    .any(|direction| {
                        left_marks.contains(direction) || right_marks.contains(direction)
                    });

                marks.extend(left_marks);
                marks.extend(right_marks);

                // a concrete direction supersedes "don't care"
                if concrete {
                    marks.remove(&Chirality::Any);
                }
            }

            QueryExpr::Disjunction(left, right) => {
                // only the branch(es) that accounted for the match contribute
                if left.matches(atom) {
                    left.chirality(atom, marks);
                }
                if right.matches(atom) {
                    right.chirality(atom, marks);
                }
            }

            QueryExpr::Negation(_) => {
                // inherited rule: negation wipes every constraint; what the
                // negation of a stereo assertion should mean is still open
                marks.clear();
            }
        }
    }
}

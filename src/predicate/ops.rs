//! Set-operator syntax for composing predicates.
//!
//! `&` intersects, `|` unions, `-` subtracts, `^` takes the exclusive
//! union and `!` inverts. Each operator delegates to the named method of
//! the same meaning, on owned values and on references alike.

use std::ops::{BitAnd, BitOr, BitXor, Not, Sub};

use super::Predicate;

macro_rules! binary_op {
    ($trait:ident, $method:ident, $call:ident) => {
        impl<T: ?Sized> $trait for Predicate<T> {
            type Output = Predicate<T>;

            fn $method(self, rhs: Predicate<T>) -> Predicate<T> {
                self.$call(&rhs)
            }
        }

        impl<T: ?Sized> $trait for &Predicate<T> {
            type Output = Predicate<T>;

            fn $method(self, rhs: &Predicate<T>) -> Predicate<T> {
                self.$call(rhs)
            }
        }

        impl<T: ?Sized> $trait<&Predicate<T>> for Predicate<T> {
            type Output = Predicate<T>;

            fn $method(self, rhs: &Predicate<T>) -> Predicate<T> {
                self.$call(rhs)
            }
        }

        impl<T: ?Sized> $trait<Predicate<T>> for &Predicate<T> {
            type Output = Predicate<T>;

            fn $method(self, rhs: Predicate<T>) -> Predicate<T> {
                self.$call(&rhs)
            }
        }
    };
}

binary_op!(BitAnd, bitand, intersect);
binary_op!(BitOr, bitor, union);
binary_op!(Sub, sub, difference);
binary_op!(BitXor, bitxor, exclusive_union);

impl<T: ?Sized> Not for Predicate<T> {
    type Output = Predicate<T>;

    fn not(self) -> Predicate<T> {
        self.invert()
    }
}

impl<T: ?Sized> Not for &Predicate<T> {
    type Output = Predicate<T>;

    fn not(self) -> Predicate<T> {
        self.invert()
    }
}

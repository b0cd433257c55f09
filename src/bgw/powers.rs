//! Powers of the master exponent with the midpoint omitted.
//!
//! For a universe of `n` receivers the G1 sequence holds `α^e · P` for every
//! exponent `e ∈ [1, 2n]` except `e = n + 1`. The missing element is exactly
//! the one the session key is built from, so no receiver may ever hold it.
//! Elements are stored densely (`2n - 1` entries) and addressed by exponent;
//! asking for the hole or anything outside `[1, 2n]` is an error, never a
//! default element.

use std::slice;

use crate::{CurvePoint, FieldElement, errors::Error};

#[derive(Clone, Debug, PartialEq)]
pub struct PowerSequence<G> {
    receivers: usize,
    elements: Vec<G>,
}

impl<G: Copy> PowerSequence<G> {
    /// Accumulates `base · α^e` for `e = 1..=2n`, skipping `e = n + 1`.
    pub fn accumulate<F>(base: &G, alpha: &F, receivers: usize) -> Result<Self, Error>
    where
        F: FieldElement,
        G: CurvePoint<F>,
    {
        let top = receivers.checked_mul(2).ok_or_else(|| {
            Error::InvalidConfig("receiver count too large for the power sequence".into())
        })?;
        let omitted = receivers + 1;
        let mut elements = Vec::with_capacity(top.saturating_sub(1));
        let mut accumulator = *base;
        for exponent in 1..=top {
            accumulator = accumulator.mul_scalar(alpha);
            if exponent != omitted {
                elements.push(accumulator);
            }
        }
        Ok(Self {
            receivers,
            elements,
        })
    }

    /// Returns `α^exponent · base`.
    pub fn get(&self, exponent: usize) -> Result<&G, Error> {
        self.position(exponent)
            .and_then(|pos| self.elements.get(pos))
            .ok_or(Error::IndexOutOfRange {
                exponent,
                receivers: self.receivers,
            })
    }

    /// The lower half, exponents `1..=n`.
    pub fn lower(&self) -> &[G] {
        &self.elements[..self.receivers]
    }

    pub fn receivers(&self) -> usize {
        self.receivers
    }

    /// The exponent that is never stored.
    pub fn omitted_exponent(&self) -> usize {
        self.receivers + 1
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates `(exponent, element)` pairs in increasing exponent order.
    pub fn iter(&self) -> Iter<'_, G> {
        Iter {
            receivers: self.receivers,
            pos: 0,
            inner: self.elements.iter(),
        }
    }

    fn position(&self, exponent: usize) -> Option<usize> {
        let n = self.receivers;
        match exponent {
            e if (1..=n).contains(&e) => Some(e - 1),
            e if (n + 2..=2 * n).contains(&e) => Some(e - 2),
            _ => None,
        }
    }
}

pub struct Iter<'a, G> {
    receivers: usize,
    pos: usize,
    inner: slice::Iter<'a, G>,
}

impl<'a, G> Iterator for Iter<'a, G> {
    type Item = (usize, &'a G);

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.inner.next()?;
        let exponent = if self.pos < self.receivers {
            self.pos + 1
        } else {
            self.pos + 2
        };
        self.pos += 1;
        Some((exponent, element))
    }
}

use crate::calc::{self, MortgageKind, Repayment};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Amount,
    Term,
    Rate,
    Kind,
}

impl Field {
    pub fn next(self) -> Self {
        match self {
            Field::Amount => Field::Term,
            Field::Term => Field::Rate,
            Field::Rate => Field::Kind,
            Field::Kind => Field::Amount,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Field::Amount => Field::Kind,
            Field::Term => Field::Amount,
            Field::Rate => Field::Term,
            Field::Kind => Field::Rate,
        }
    }
}

/// One error flag per form field. All false until the first submit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub amount: bool,
    pub term: bool,
    pub rate: bool,
    pub kind: bool,
}

impl FieldErrors {
    pub fn any(&self) -> bool {
        self.amount || self.term || self.rate || self.kind
    }
}

/// The form state: raw text buffers for the numeric fields, the selected
/// repayment type, per-field error flags, whether a submit has happened
/// yet, and the last computed result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MortgageForm {
    pub amount: String,
    pub term: String,
    pub rate: String,
    pub kind: Option<MortgageKind>,
    pub errors: FieldErrors,
    pub submitted: bool,
    pub result: Option<Repayment>,
}

/// A numeric field is valid when non-blank, parseable, finite, and
/// strictly positive. The same rule applies to amount, term, and rate.
fn parse_positive(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Some(v),
        _ => None,
    }
}

impl MortgageForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the raw text of a numeric field. Before the first submit
    /// this never touches error flags; afterwards the edited field is
    /// revalidated immediately so the error indicator tracks the input.
    pub fn set_field(&mut self, field: Field, raw: impl Into<String>) {
        let raw = raw.into();
        match field {
            Field::Amount => self.amount = raw,
            Field::Term => self.term = raw,
            Field::Rate => self.rate = raw,
            // The type field has no text buffer.
            Field::Kind => return,
        }
        if self.submitted {
            let ok = parse_positive(self.raw(field)).is_some();
            match field {
                Field::Amount => self.errors.amount = !ok,
                Field::Term => self.errors.term = !ok,
                Field::Rate => self.errors.rate = !ok,
                Field::Kind => {}
            }
        }
    }

    /// Appends one typed character to a numeric field. Only digits and a
    /// decimal point are accepted; anything else is ignored.
    pub fn push_char(&mut self, field: Field, c: char) {
        if !c.is_ascii_digit() && c != '.' {
            return;
        }
        let mut raw = self.raw(field).to_string();
        raw.push(c);
        self.set_field(field, raw);
    }

    /// Deletes the last character of a numeric field.
    pub fn pop_char(&mut self, field: Field) {
        let mut raw = self.raw(field).to_string();
        raw.pop();
        self.set_field(field, raw);
    }

    pub fn raw(&self, field: Field) -> &str {
        match field {
            Field::Amount => &self.amount,
            Field::Term => &self.term,
            Field::Rate => &self.rate,
            Field::Kind => "",
        }
    }

    /// Selects the repayment type. Does not clear the type error flag;
    /// that only happens on the next full submit.
    pub fn select_kind(&mut self, kind: MortgageKind) {
        self.kind = Some(kind);
    }

    /// Validates every field, marks the form as submitted, and computes
    /// the repayment figures when everything is valid. On a validation
    /// failure any previously displayed result is left in place.
    pub fn submit(&mut self) {
        let amount = parse_positive(&self.amount);
        let term = parse_positive(&self.term);
        let rate = parse_positive(&self.rate);

        self.errors = FieldErrors {
            amount: amount.is_none(),
            term: term.is_none(),
            rate: rate.is_none(),
            kind: self.kind.is_none(),
        };
        self.submitted = true;

        if let (Some(principal), Some(rate), Some(term), Some(kind)) =
            (amount, rate, term, self.kind)
        {
            self.result = Some(calc::compute(principal, rate, term, kind));
        }
    }

    /// Resets everything back to the initial state: empty buffers, no
    /// type selected, no errors, not submitted, no result.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

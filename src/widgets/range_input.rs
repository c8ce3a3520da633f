//! Text inputs for the four window bounds

use crate::error::Rejection;
use crate::state::{AnalysisSession, BoundField, SeriesBounds};

/// The displayed text of the four bound inputs.
///
/// Edits go through the session; on acceptance every input re-syncs to the
/// accepted (possibly clamped) window, on rejection the edited input reverts.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundInputs {
    index_min: String,
    index_max: String,
    value_min: String,
    value_max: String,
}

impl BoundInputs {
    /// Inputs showing the session's current window
    pub fn new(session: &AnalysisSession) -> Self {
        let mut inputs = Self {
            index_min: String::new(),
            index_max: String::new(),
            value_min: String::new(),
            value_max: String::new(),
        };
        inputs.sync(session);
        inputs
    }

    /// Submit `text` typed into the input for `field`
    pub fn submit(
        &mut self,
        session: &mut AnalysisSession,
        field: BoundField,
        text: &str,
    ) -> Result<SeriesBounds, Rejection> {
        let previous = self.text(field).to_string();
        *self.text_mut(field) = text.to_string();

        match session.propose(field, text) {
            Ok(bounds) => {
                self.sync(session);
                Ok(bounds)
            }
            Err(rejection) => {
                *self.text_mut(field) = previous;
                Err(rejection)
            }
        }
    }

    /// Overwrite every input with the session's current window
    pub fn sync(&mut self, session: &AnalysisSession) {
        for field in BoundField::ALL {
            *self.text_mut(field) = session.display(field);
        }
    }

    pub fn text(&self, field: BoundField) -> &str {
        match field {
            BoundField::IndexMin => &self.index_min,
            BoundField::IndexMax => &self.index_max,
            BoundField::ValueMin => &self.value_min,
            BoundField::ValueMax => &self.value_max,
        }
    }

    fn text_mut(&mut self, field: BoundField) -> &mut String {
        match field {
            BoundField::IndexMin => &mut self.index_min,
            BoundField::IndexMax => &mut self.index_max,
            BoundField::ValueMin => &mut self.value_min,
            BoundField::ValueMax => &mut self.value_max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SampleSeries;
    use crate::state::{PassThresholds, WindowedSeriesStore};

    fn session() -> AnalysisSession {
        let series = SampleSeries::from_values(&[10.25, 12.0, 11.0, 13.125, 9.5]).unwrap();
        let store = WindowedSeriesStore::new(series, PassThresholds { min: 8.0, max: 13.0 });
        AnalysisSession::new("Thickness", store, 2)
    }

    #[test]
    fn test_initial_text() {
        let session = session();
        let inputs = BoundInputs::new(&session);
        assert_eq!(inputs.text(BoundField::IndexMin), "0");
        assert_eq!(inputs.text(BoundField::IndexMax), "4");
        assert_eq!(inputs.text(BoundField::ValueMin), "9.5");
        // shown at the session precision
        assert_eq!(inputs.text(BoundField::ValueMax), "13.13");
    }

    #[test]
    fn test_clamped_value_is_displayed() {
        let mut session = session();
        let mut inputs = BoundInputs::new(&session);

        inputs
            .submit(&mut session, BoundField::IndexMax, "2")
            .unwrap();
        assert_eq!(inputs.text(BoundField::IndexMax), "2");

        let bounds = inputs
            .submit(&mut session, BoundField::IndexMax, "100")
            .unwrap();
        assert_eq!(bounds.index_max, 4);
        assert_eq!(inputs.text(BoundField::IndexMax), "4");

        inputs
            .submit(&mut session, BoundField::IndexMin, "-7")
            .unwrap();
        assert_eq!(inputs.text(BoundField::IndexMin), "0");

        inputs
            .submit(&mut session, BoundField::ValueMax, "11")
            .unwrap();
        inputs
            .submit(&mut session, BoundField::ValueMax, "99")
            .unwrap();
        assert_eq!(inputs.text(BoundField::ValueMax), "13.13");
    }

    #[test]
    fn test_rejection_reverts_only_edited_input() {
        let mut session = session();
        let mut inputs = BoundInputs::new(&session);
        inputs
            .submit(&mut session, BoundField::ValueMin, "10")
            .unwrap();
        let before = inputs.clone();

        let err = inputs
            .submit(&mut session, BoundField::ValueMax, "5")
            .unwrap_err();
        assert!(matches!(err, Rejection::OutOfOrder { .. }));
        assert_eq!(inputs, before);

        let err = inputs
            .submit(&mut session, BoundField::IndexMax, "four")
            .unwrap_err();
        assert!(matches!(err, Rejection::NotANumber { .. }));
        assert_eq!(inputs, before);
    }
}

use log::debug;

use crate::contact::clipboard::CopyOutcome;
use crate::contact::modal::ContactModalController;
use crate::estimator::catalog::PackageChoice;
use crate::estimator::panel::PanelController;
use crate::estimator::state::{AreaInput, EstimatorState};

/// Everything the page can ask of the estimator and contact controllers.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    SetArea(AreaInput),
    SetPackage(PackageChoice),
    OpenPanel,
    ClosePanel,
    OpenModal,
    CloseModal,
    CopyNumber,
    CopyFinished(CopyOutcome),
    CopyStatusExpired,
    AutoOpenElapsed,
}

/// Controllers owned by one mounted landing page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub estimator: EstimatorState,
    pub panel: PanelController,
    pub contact: ContactModalController,
}

impl Session {
    /// Routes the intent to its controller. Returns true when the view needs
    /// to re-render.
    pub fn apply(&mut self, intent: Intent) -> bool {
        debug!("intent: {:?}", intent);
        match intent {
            Intent::SetArea(input) => self.estimator.set_area(input),
            Intent::SetPackage(choice) => self.estimator.set_package(choice),
            Intent::OpenPanel => self.panel.open(),
            Intent::ClosePanel => self.panel.close(),
            Intent::OpenModal => self.contact.open(),
            Intent::CloseModal => self.contact.close(),
            Intent::CopyNumber => self.contact.begin_copy(),
            Intent::CopyFinished(outcome) => self.contact.finish_copy(outcome),
            Intent::CopyStatusExpired => self.contact.reset_copy_status(),
            Intent::AutoOpenElapsed => self.contact.auto_open_elapsed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_and_modal_are_independent() {
        let mut session = Session::default();

        session.apply(Intent::OpenPanel);
        assert!(session.panel.is_open());
        assert!(!session.contact.is_open());

        session.apply(Intent::OpenModal);
        assert!(session.panel.is_open());
        assert!(session.contact.is_open());

        session.apply(Intent::ClosePanel);
        assert!(!session.panel.is_open());
        assert!(session.contact.is_open());

        session.apply(Intent::OpenPanel);
        session.apply(Intent::CloseModal);
        assert!(session.panel.is_open());
        assert!(!session.contact.is_open());

        session.apply(Intent::AutoOpenElapsed);
        assert!(!session.contact.is_open());
        assert!(session.panel.is_open());
    }

    #[test]
    fn test_estimator_intents() {
        let mut session = Session::default();
        assert!(session.apply(Intent::SetArea(AreaInput::Slider(3000))));
        assert!(session.apply(Intent::SetPackage(PackageChoice::Custom)));
        assert_eq!(session.estimator.total_cost(), 0);

        session.apply(Intent::SetPackage(PackageChoice::Classic));
        assert_eq!(session.estimator.total_cost(), 7_500_000);
        assert!(!session.panel.is_open());
        assert!(!session.contact.is_open());
    }

    #[test]
    fn test_copy_flow() {
        let mut session = Session::default();
        session.apply(Intent::OpenModal);
        assert!(session.apply(Intent::CopyNumber));
        assert!(session.apply(Intent::CopyFinished(CopyOutcome::Failed)));
        assert!(session.contact.is_open());
        assert!(session.apply(Intent::CopyStatusExpired));
        assert!(!session.apply(Intent::CopyStatusExpired));
    }
}

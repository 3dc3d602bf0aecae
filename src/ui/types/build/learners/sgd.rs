use crate::classifiers::{ClassifierError, SgdClassifier};
use crate::ui::types::choices::SgdParams;

impl TryFrom<SgdParams> for SgdClassifier {
    type Error = ClassifierError;

    fn try_from(p: SgdParams) -> Result<Self, Self::Error> {
        SgdClassifier::new(p.penalty, p.alpha, p.max_iter, p.tol, p.seed)
    }
}

use crate::classifiers::{ClassifierError, Svc};
use crate::ui::types::choices::SvcParams;

impl TryFrom<SvcParams> for Svc {
    type Error = ClassifierError;

    fn try_from(p: SvcParams) -> Result<Self, Self::Error> {
        Svc::new(
            p.c,
            p.kernel,
            p.gamma,
            p.tol,
            p.max_passes,
            p.max_iter,
            p.seed,
        )
    }
}

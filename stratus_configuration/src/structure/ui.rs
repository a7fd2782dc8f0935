use serde::Deserialize;

use crate::traits::ResolvableConfiguration;

#[derive(Clone)]
pub struct UiConfiguration {
    /// Width of horizontal rules and centred headers in the console output.
    pub line_width: usize,

    /// When disabled, all output is printed without ANSI colour styling.
    pub use_colours: bool,
}

#[derive(Deserialize, Clone)]
pub(crate) struct UnresolvedUiConfiguration {
    line_width: usize,
    use_colours: bool,
}

impl ResolvableConfiguration for UnresolvedUiConfiguration {
    type Resolved = UiConfiguration;

    fn resolve(self) -> miette::Result<Self::Resolved> {
        Ok(UiConfiguration {
            line_width: self.line_width,
            use_colours: self.use_colours,
        })
    }
}

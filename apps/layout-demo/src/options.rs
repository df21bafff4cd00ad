use anyhow::{bail, Context};

/// Settings for one demo run.
#[derive(Clone, Debug, PartialEq)]
pub struct DemoOptions {
    pub width: f32,
    pub height: f32,
    pub fab: bool,
    pub fab_margin: f32,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            fab: true,
            fab_margin: 16.0,
        }
    }
}

impl DemoOptions {
    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_fab(mut self, fab: bool) -> Self {
        self.fab = fab;
        self
    }

    /// Parses `[WIDTHxHEIGHT] [--no-fab]`.
    pub fn from_args<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = Self::default();
        for arg in args {
            if arg == "--no-fab" {
                options = options.with_fab(false);
                continue;
            }
            let Some((width, height)) = arg.split_once('x') else {
                bail!("unrecognized argument `{arg}`; expected WIDTHxHEIGHT or --no-fab");
            };
            let width: f32 = width
                .parse()
                .with_context(|| format!("invalid viewport width in `{arg}`"))?;
            let height: f32 = height
                .parse()
                .with_context(|| format!("invalid viewport height in `{arg}`"))?;
            if !(width >= 0.0 && height >= 0.0 && width.is_finite() && height.is_finite()) {
                bail!("viewport `{arg}` must be finite and non-negative");
            }
            options = options.with_viewport(width, height);
        }
        Ok(options)
    }
}

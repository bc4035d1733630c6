//! The `css` command: provision the stylesheet

use super::{Command, Session};
use crate::context::BuildContext;
use crate::error::Result;
use crate::fetcher::Fetcher;
use crate::ui;

/// Runs the [`Fetcher`] against the invocation's project
pub struct FetchAssetCommand<'a> {
    ctx: &'a BuildContext,
}

impl<'a> FetchAssetCommand<'a> {
    pub fn new(ctx: &'a BuildContext) -> Self {
        Self { ctx }
    }
}

impl Command for FetchAssetCommand<'_> {
    fn run(&self, _session: &mut Session<'_>) -> Result<()> {
        let fetcher = Fetcher::new(&self.ctx.asset, &self.ctx.project, &self.ctx.transports);
        let mut reporter = ui::reporter(self.ctx.quiet);

        reporter.start(self.ctx.asset.url());
        match fetcher.ensure_present() {
            Ok(outcome) => {
                reporter.finish(&outcome);
                Ok(())
            }
            Err(err) => {
                reporter.abandon();
                Err(err)
            }
        }
    }
}

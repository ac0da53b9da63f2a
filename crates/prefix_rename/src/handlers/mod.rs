use std::{ffi::OsString, io::Write};

use crate::application::{PrefixRenameService, RenameSummary};
use crate::cli::Cli;
use crate::errors::PrefixRenameResult;

/// Parse `args`, load the config file and run the rename walk
///
/// Progress lines go to `diagnostics`. Nothing here touches process-wide
/// state, so the function can be called repeatedly.
pub async fn run<I, T>(
    args: I,
    diagnostics: &mut (dyn Write + Send),
) -> PrefixRenameResult<RenameSummary>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let config = Cli::parse_config_from(args).await?;
    let service = PrefixRenameService::new(config);

    tracing::info!(
        directory = %service.config().directory(),
        search_prefix = %service.config().search_prefix(),
        replace_with = %service.config().replace_with(),
        "Starting prefix rename"
    );

    service.run(diagnostics).await
}

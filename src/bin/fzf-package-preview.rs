use fzf_preview::cli::{self, PackageArgs};
use fzf_preview::preview::PackagePreviewer;
use std::process::ExitCode;

fn main() -> ExitCode {
    cli::run(|args: PackageArgs, session, out| {
        PackagePreviewer::new(&session.config, &session.runner)
            .with_theme(session.theme)
            .preview(&args.name, &args.cache_file, out)?;
        Ok(())
    })
}

//! CLI command for branding a resource group

use std::cell::Cell;
use std::time::Instant;

use super::BrandArgs;
use crate::branding::GritFingerprint;
use crate::cli::progress::{DISK, GEAR, LINK, LOOKING_GLASS, print_done, print_step};
use crate::error::Error;
use crate::manifest::BrandManifest;
use crate::rebrand::{BrandPhase, OutputLayout, ResourceGroup, brand_resource_group};

const STEPS: usize = 4;

/// Brand a GRD file, its GRDP parts and every locale it declares
pub fn execute(args: &BrandArgs) -> anyhow::Result<()> {
    let start = Instant::now();

    let manifest = match &args.manifest {
        Some(path) => BrandManifest::load(path)?,
        None => BrandManifest::default(),
    };
    let resources = manifest.resources;

    let profile = args.browser.merged_with(&manifest.browser).profile()?;
    let grd_file = args
        .grd_file
        .clone()
        .or(resources.grd_file)
        .ok_or(Error::MissingSetting("GRD file"))?;
    let output_path = args
        .output_path
        .clone()
        .or(resources.output_path)
        .ok_or(Error::MissingSetting("output path"))?;
    let layout = OutputLayout {
        output_path,
        xtb_relative_path: args.xtb_relative_path.clone().or(resources.xtb_relative_path),
    };

    if !args.quiet {
        print_step(1, STEPS, LOOKING_GLASS, "Checking inputs...");
    }
    let group = ResourceGroup::for_grd_path(
        &grd_file,
        &prefer_flags(&args.grdp_files, resources.grdp_files),
        prefer_flags(&args.grdp_extras, resources.grdp_extras),
        prefer_flags(&args.xtb_extras, resources.xtb_extras),
    )?;

    let last_phase = Cell::new(None);
    let summary = brand_resource_group(&profile, &GritFingerprint, &group, &layout, &|progress| {
        if args.quiet || last_phase.get() == Some(progress.phase) {
            return;
        }
        last_phase.set(Some(progress.phase));
        match progress.phase {
            BrandPhase::BrandingDocuments => {
                print_step(2, STEPS, GEAR, &format!("{}...", progress.phase.as_str()));
            }
            BrandPhase::RelocatingTranslations => {
                print_step(3, STEPS, LINK, &format!("{}...", progress.phase.as_str()));
            }
            BrandPhase::WritingBundles => {
                print_step(4, STEPS, DISK, &format!("{}...", progress.phase.as_str()));
            }
            BrandPhase::Complete => {}
        }
    })?;

    if !args.quiet {
        println!(
            "Branded {} documents and {} locales into {}",
            summary.documents_written.len(),
            summary.bundles_written.len(),
            layout.output_path.display()
        );
        println!(
            "{} messages re-keyed, {} translations relocated, {} dropped",
            summary.messages_remapped, summary.translations_relocated, summary.translations_dropped
        );
        print_done(start.elapsed());
    }

    Ok(())
}

/// Values given on the command line win over the manifest's.
fn prefer_flags<T: Clone>(flags: &[T], manifest: Vec<T>) -> Vec<T> {
    if flags.is_empty() { manifest } else { flags.to_vec() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_prefer_flags() {
        let manifest = vec![PathBuf::from("a.grdp")];
        assert_eq!(prefer_flags(&[], manifest.clone()), manifest);
        assert_eq!(
            prefer_flags(&[PathBuf::from("b.grdp")], manifest),
            vec![PathBuf::from("b.grdp")]
        );
    }
}

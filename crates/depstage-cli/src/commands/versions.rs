use miette::Result;

use depstage_install::catalog::LocalCatalog;

use crate::cli::CatalogArgs;

pub fn exec(args: &CatalogArgs) -> Result<()> {
    let catalog = LocalCatalog::load(&args.buildpack_dir)?;
    let listing = depstage_ops::ops_versions::list_versions(&catalog, &args.dependency)?;

    if listing.versions.is_empty() && listing.unparsed.is_empty() {
        println!("No versions of {} in the catalog.", args.dependency);
    } else {
        println!("{} versions:", args.dependency);
        for v in listing.versions.iter().chain(&listing.unparsed) {
            println!("  {v}");
        }
    }

    if !listing.lines.is_empty() {
        println!("\nVersion lines:");
        for (line, selector) in listing.lines.iter() {
            println!("  {line:<12} {selector}");
        }
    }
    Ok(())
}

use miette::Result;

use depstage_install::catalog::LocalCatalog;

use crate::cli::CatalogArgs;

pub fn exec(args: &CatalogArgs, specifier: &str) -> Result<()> {
    let catalog = LocalCatalog::load(&args.buildpack_dir)?;
    let dep = depstage_ops::ops_versions::resolve_version(&catalog, &args.dependency, specifier)?;
    println!("{}", dep.version);
    Ok(())
}

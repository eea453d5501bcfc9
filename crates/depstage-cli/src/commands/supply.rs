use std::path::PathBuf;

use miette::Result;

use depstage_install::catalog::LocalCatalog;
use depstage_install::install::BinLink;
use depstage_install::stager::DirStager;
use depstage_ops::ops_supply::{SupplyOptions, Supplier};

use crate::cli::CatalogArgs;

pub struct SupplyArgs {
    pub build_dir: PathBuf,
    pub cache_dir: PathBuf,
    pub deps_dir: PathBuf,
    pub deps_idx: String,
    pub catalog: CatalogArgs,
    pub config: String,
    pub bin_path: PathBuf,
    pub bin_name: Option<String>,
}

pub fn exec(args: SupplyArgs) -> Result<()> {
    let catalog = LocalCatalog::load(&args.catalog.buildpack_dir)?;
    let stager = DirStager::new(args.build_dir, args.cache_dir, args.deps_dir, args.deps_idx);

    let bin_name = args
        .bin_name
        .unwrap_or_else(|| args.catalog.dependency.clone());
    let options = SupplyOptions {
        dependency: args.catalog.dependency,
        config_file: args.config,
        bin: BinLink::new(bin_name, args.bin_path),
    };

    let link = stager.bin_dir().join(&options.bin.name);

    let outcome = Supplier::new(&catalog, &stager, options).run()?;
    depstage_util::progress::detail(&format!(
        "Linked {} -> {}",
        link.display(),
        outcome.binary.display()
    ));
    Ok(())
}

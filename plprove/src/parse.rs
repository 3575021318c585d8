use crate::Error;
use log::info;
use proplog::role::RoleMap;
use proplog::{tptp, Formula};
use std::path::{Path, PathBuf};

fn read_file(filename: &Path) -> std::io::Result<Vec<u8>> {
    std::fs::read(filename).or_else(|e| {
        let tptp = std::env::var("TPTP").or(Err(e))?;
        let mut path = PathBuf::from(tptp);
        path.push(filename);
        std::fs::read(path)
    })
}

/// Parse a TPTP file and the files it includes.
///
/// Included files are searched relative to the working directory,
/// and then relative to the directory in the `TPTP` environment variable.
pub fn parse_file(filename: &Path, forms: &mut RoleMap<Vec<Formula>>) -> Result<(), Error> {
    info!("loading {:?}", filename);
    let bytes = read_file(filename)?;
    tptp::parse(&bytes, forms, |include, forms| {
        info!("include {}", include);
        parse_file(Path::new(include), forms).map_err(|e| *e.get_kind())
    })?;
    Ok(())
}

pub fn parse(filename: &Path) -> Result<RoleMap<Vec<Formula>>, Error> {
    let mut forms = RoleMap::default();
    parse_file(filename, &mut forms)?;
    Ok(forms)
}

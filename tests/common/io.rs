//! Function to write test data on disk

/* std use */
use std::io::Write as _;

/* crate use */

/* project use */
use crate::common::constant;

#[allow(dead_code)]
/// Write buffer in path
pub fn write_buffer<P>(data: &[u8], path: P) -> std::io::Result<()>
where
    P: AsRef<std::path::Path>,
{
    let mut output = std::fs::File::create(path)?;

    output.write_all(data)?;

    Ok(())
}

#[allow(dead_code)]
/// Write each bucket in directory as <name>.txt
pub fn write_buckets<P>(buckets: &[(String, Vec<u8>)], dir: P) -> std::io::Result<()>
where
    P: AsRef<std::path::Path>,
{
    for (name, content) in buckets {
        write_buffer(content, dir.as_ref().join(format!("{}.txt", name)))?;
    }

    Ok(())
}

#[cfg(unix)]
#[allow(dead_code)]
/// Write executable script in path
pub fn write_script<P>(content: &[u8], path: P) -> std::io::Result<()>
where
    P: AsRef<std::path::Path>,
{
    use std::os::unix::fs::PermissionsExt as _;

    write_buffer(content, path.as_ref())?;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))?;

    Ok(())
}

#[cfg(unix)]
#[allow(dead_code)]
/// Write fake kmc and kmc_dump in dir, return their paths
pub fn fake_kmc<P>(dir: P) -> std::io::Result<(std::path::PathBuf, std::path::PathBuf)>
where
    P: AsRef<std::path::Path>,
{
    let kmc = dir.as_ref().join("kmc");
    let kmc_dump = dir.as_ref().join("kmc_dump");

    write_script(constant::FAKE_KMC, &kmc)?;
    write_script(constant::FAKE_KMC_DUMP, &kmc_dump)?;

    Ok((kmc, kmc_dump))
}

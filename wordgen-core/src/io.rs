use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::{env, fs, io};

/// Platform line terminator used for saved word lists.
pub const LINE_ENDING: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Reads a whole text file.
pub(crate) fn read_to_string<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}

/// Writes one line per item, each followed by the platform line terminator.
///
/// The file is created or truncated.
pub fn write_lines<P, S>(filename: P, lines: &[S]) -> io::Result<()>
where
	P: AsRef<Path>,
	S: AsRef<str>,
{
	let mut out = BufWriter::new(File::create(filename)?);
	for line in lines {
		out.write_all(line.as_ref().as_bytes())?;
		out.write_all(LINE_ENDING.as_bytes())?;
	}
	out.flush()
}

/// Returns the postcard cache path of a profile source.
///
/// `profiles/italian.toml` caches to `profiles/italian.bin`.
pub(crate) fn cache_path(source: &Path) -> io::Result<PathBuf> {
	if source.file_name().is_none() {
		return Err(io::Error::new(
			io::ErrorKind::InvalidInput,
			format!("Profile path has no file name: {}", source.display()),
		));
	}
	Ok(source.with_extension("bin"))
}

/// True if `path` exists and was modified after `reference`.
///
/// Any metadata error counts as "not newer".
pub(crate) fn is_newer<P: AsRef<Path>, R: AsRef<Path>>(path: P, reference: R) -> bool {
	let modified = |p: &Path| fs::metadata(p).and_then(|m| m.modified()).ok();
	match (modified(path.as_ref()), modified(reference.as_ref())) {
		(Some(candidate), Some(source)) => candidate > source,
		_ => false,
	}
}

/// Directory to scan for profiles; `"."` and `"./"` mean the working directory.
pub(crate) fn profile_dir(dir: &Path) -> PathBuf {
	if dir == Path::new(".") || dir == Path::new("./") {
		env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		dir.to_path_buf()
	}
}

/// Paths of the `.toml` profiles directly inside `dir`, in file name order.
pub(crate) fn profile_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
	let mut files = fs::read_dir(dir)?
		.map(|entry| entry.map(|e| e.path()))
		.filter(|path| match path {
			Ok(path) => path.is_file() && path.extension().is_some_and(|ext| ext == "toml"),
			Err(_) => true,
		})
		.collect::<io::Result<Vec<_>>>()?;
	files.sort();
	Ok(files)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn cache_sits_next_to_the_source() {
		let path = cache_path(Path::new("profiles/italian.toml")).unwrap();
		assert_eq!(path, Path::new("profiles/italian.bin"));
	}

	#[test]
	fn cache_path_requires_a_file_name() {
		assert!(cache_path(Path::new("/")).is_err());
	}

	#[test]
	fn write_lines_adds_trailing_terminator() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("words.txt");
		write_lines(&path, &["abc", "de"]).unwrap();
		let content = read_to_string(&path).unwrap();
		assert_eq!(content, format!("abc{LINE_ENDING}de{LINE_ENDING}"));
	}

	#[test]
	fn profile_files_skips_caches_and_directories() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("b.toml"), "").unwrap();
		fs::write(dir.path().join("a.toml"), "").unwrap();
		fs::write(dir.path().join("a.bin"), "").unwrap();
		fs::create_dir(dir.path().join("c.toml")).unwrap();
		let files = profile_files(dir.path()).unwrap();
		assert_eq!(files, vec![dir.path().join("a.toml"), dir.path().join("b.toml")]);
	}

	#[test]
	fn profile_dir_expands_the_working_directory() {
		let cwd = env::current_dir().unwrap();
		assert_eq!(profile_dir(Path::new(".")), cwd);
		assert_eq!(profile_dir(Path::new("./")), cwd);
		assert_eq!(profile_dir(Path::new("profiles")), Path::new("profiles"));
	}

	#[test]
	fn missing_files_are_not_newer() {
		assert!(!is_newer("does/not/exist.bin", "does/not/exist.toml"));
	}
}

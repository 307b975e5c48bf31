use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tokio::{fs::File, io::AsyncReadExt};
use tracing::debug;

use crate::error::{Error, IoError};

#[derive(Debug, Default)]
pub struct FileReader {
    inner: Option<File>,
    path: PathBuf,
}

impl FileReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn open<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Error> {
        let path_buf = path.as_ref().to_path_buf();

        match File::open(&path_buf).await {
            Ok(file) => {
                self.inner = Some(file);
                self.path = path_buf;
                Ok(())
            }
            Err(error) => Err(IoError::File(error.kind()).into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn read_into(&mut self, buffer: &mut String) -> Result<(), Error> {
        match &mut self.inner {
            Some(reader) => {
                let bytes = reader
                    .read_to_string(buffer)
                    .await
                    .map_err(|error| IoError::Reader(error.kind()))?;

                debug!(path = ?self.path, bytes, "read file");
                Ok(())
            }

            None => Err(IoError::Reader(std::io::ErrorKind::InvalidInput).into()),
        }
    }
}

/// Reads the whole file at `path` into a string.
pub async fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String, Error> {
    let mut buffer = String::new();
    let mut reader = FileReader::new();

    reader.open(path).await?;
    reader.read_into(&mut buffer).await?;

    Ok(buffer)
}

/// Reads and deserializes a JSON document.
pub async fn read_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T, Error> {
    let buffer = read_to_string(path).await?;
    Ok(serde_json::from_str(&buffer)?)
}

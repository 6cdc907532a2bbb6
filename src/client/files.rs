//! File management and transfer operations.
//!
//! Listing, reading and mutating files go through the panel; bulk
//! transfers go through one-shot presigned URLs on the hosting node,
//! modeled by [`Downloader`] and [`Uploader`].

use crate::error::{CrocError, Result};
use crate::transport::{Object, ObjectList, Session, query_escape};
use crate::types::{
    ChmodDescriptor, CompressDescriptor, CreateFolderDescriptor, DecompressDescriptor,
    DeleteFilesDescriptor, File, PullDescriptor, RenameDescriptor,
};
use reqwest::{Method, StatusCode, multipart};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;
use tokio::io::AsyncWriteExt;

/// Client for a server's file system.
///
/// Access via `client.files()`.
pub struct FilesClient {
    session: Session,
}

impl FilesClient {
    pub(crate) fn new(session: Session) -> Self {
        Self { session }
    }

    /// List the entries of a directory.
    pub async fn list(&self, identifier: &str, directory: &str) -> Result<Vec<File>> {
        let list: ObjectList<File> = self
            .session
            .get_json(&format!(
                "/servers/{identifier}/files/list?directory={}",
                query_escape(directory)
            ))
            .await?;

        Ok(list.attributes())
    }

    /// Read a file's contents. Returns raw bytes; the panel serves text
    /// files as plain text rather than JSON.
    pub async fn contents(&self, identifier: &str, file: &str) -> Result<Vec<u8>> {
        self.session
            .get_raw(
                &format!(
                    "/servers/{identifier}/files/contents?file={}",
                    query_escape(file)
                ),
                "application/json,text/plain",
            )
            .await
    }

    /// Request a one-shot download URL for a file and wrap it in a
    /// [`Downloader`]. Refuses directories up front; the presigned URL
    /// would hand back an archive error later anyway.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use crocgodyl::Client;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("https://panel.example", "client_token")?;
    ///
    ///     let dl = client.files().download("abc123", "/logs/latest.log").await?;
    ///     dl.execute().await?; // writes ./latest.log
    ///     Ok(())
    /// }
    /// ```
    pub async fn download(&self, identifier: &str, file: &str) -> Result<Downloader> {
        let (parent, name) = split_path(file);

        let entries = self.list(identifier, parent).await?;
        if let Some(entry) = entries.iter().find(|e| e.name == name) {
            if entry.mime_type == "inode/directory" {
                return Err(CrocError::DirectoryDownload);
            }
        }

        #[derive(Deserialize)]
        struct SignedUrl {
            url: String,
        }

        let obj: Object<SignedUrl> = self
            .session
            .get_json(&format!(
                "/servers/{identifier}/files/download?file={}",
                query_escape(file)
            ))
            .await?;

        Ok(Downloader {
            session: self.session.clone(),
            name: name.to_string(),
            path: file.to_string(),
            url: obj.attributes.url,
        })
    }

    /// Request a one-shot upload URL.
    pub async fn upload_url(&self, identifier: &str) -> Result<String> {
        #[derive(Deserialize)]
        struct SignedUrl {
            url: String,
        }

        let obj: Object<SignedUrl> = self
            .session
            .get_json(&format!("/servers/{identifier}/files/upload"))
            .await?;

        Ok(obj.attributes.url)
    }

    /// Request a one-shot upload URL and wrap it in an [`Uploader`]. Set
    /// [`Uploader::path`] to the local file before executing.
    pub async fn upload(&self, identifier: &str) -> Result<Uploader> {
        let url = self.upload_url(identifier).await?;

        Ok(Uploader {
            session: self.session.clone(),
            url,
            path: String::new(),
        })
    }

    /// Rename or move files under a common root.
    pub async fn rename(&self, identifier: &str, files: RenameDescriptor) -> Result<()> {
        self.session
            .send_empty(
                Method::PUT,
                &format!("/servers/{identifier}/files/rename"),
                Some(&files),
            )
            .await
    }

    /// Copy a file next to itself; the panel picks the new name.
    pub async fn copy(&self, identifier: &str, location: &str) -> Result<()> {
        #[derive(Serialize)]
        struct Body<'a> {
            location: &'a str,
        }

        self.session
            .send_empty(
                Method::POST,
                &format!("/servers/{identifier}/files/copy"),
                Some(&Body { location }),
            )
            .await
    }

    /// Write text content to a file, creating it if needed.
    pub async fn write(&self, identifier: &str, name: &str, content: &str) -> Result<()> {
        self.write_bytes(identifier, name, "text/plain", content.as_bytes().to_vec())
            .await
    }

    /// Write raw content to a file with an explicit content type.
    pub async fn write_bytes(
        &self,
        identifier: &str,
        name: &str,
        content_type: &str,
        content: Vec<u8>,
    ) -> Result<()> {
        self.session
            .post_raw(
                &format!(
                    "/servers/{identifier}/files/write?file={}",
                    query_escape(name)
                ),
                content_type,
                content,
            )
            .await
    }

    /// Pack files into an archive next to them.
    pub async fn compress(&self, identifier: &str, files: CompressDescriptor) -> Result<()> {
        self.session
            .send_empty(
                Method::POST,
                &format!("/servers/{identifier}/files/compress"),
                Some(&files),
            )
            .await
    }

    /// Unpack an archive in place.
    pub async fn decompress(&self, identifier: &str, file: DecompressDescriptor) -> Result<()> {
        self.session
            .send_empty(
                Method::POST,
                &format!("/servers/{identifier}/files/decompress"),
                Some(&file),
            )
            .await
    }

    /// Delete files under a common root.
    pub async fn delete(&self, identifier: &str, files: DeleteFilesDescriptor) -> Result<()> {
        self.session
            .send_empty(
                Method::POST,
                &format!("/servers/{identifier}/files/delete"),
                Some(&files),
            )
            .await
    }

    /// Create a directory.
    pub async fn create_folder(
        &self,
        identifier: &str,
        folder: CreateFolderDescriptor,
    ) -> Result<()> {
        self.session
            .send_empty(
                Method::POST,
                &format!("/servers/{identifier}/files/create-folder"),
                Some(&folder),
            )
            .await
    }

    /// Change file modes under a common root.
    pub async fn chmod(&self, identifier: &str, files: ChmodDescriptor) -> Result<()> {
        self.session
            .send_empty(
                Method::POST,
                &format!("/servers/{identifier}/files/chmod"),
                Some(&files),
            )
            .await
    }

    /// Have the node pull a remote URL onto the server's volume.
    pub async fn pull(&self, identifier: &str, file: PullDescriptor) -> Result<()> {
        self.session
            .send_empty(
                Method::POST,
                &format!("/servers/{identifier}/files/pull"),
                Some(&file),
            )
            .await
    }
}

/// Splits a remote path into parent directory and basename.
fn split_path(path: &str) -> (&str, &str) {
    match path.rsplit_once('/') {
        Some(("", name)) => ("/", name),
        Some((parent, name)) => (parent, name),
        None => ("/", path),
    }
}

/// Streams a one-shot download URL to a local file.
///
/// Returned by [`FilesClient::download`]. The URL is presigned,
/// unauthenticated and single-use; a second `execute` against the same
/// URL fails at the node and is not masked here.
#[derive(Debug, Clone)]
pub struct Downloader {
    session: Session,
    /// Basename of the remote file; the local destination, relative to
    /// the working directory unless changed.
    pub name: String,
    /// The remote path the download was requested for.
    pub path: String,
    url: String,
}

impl Downloader {
    /// The one-shot URL handed out by the panel.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetches the one-shot URL and streams the body to [`name`] with
    /// mode 0644. Refuses to overwrite an existing regular file at
    /// [`path`]; an existing directory there is tolerated.
    ///
    /// [`name`]: Downloader::name
    /// [`path`]: Downloader::path
    pub async fn execute(&self) -> Result<()> {
        if let Ok(info) = tokio::fs::metadata(&self.path).await {
            if !info.is_dir() {
                return Err(CrocError::RefusingOverwrite);
            }
        }

        let mut res = self.session.http().get(&self.url).send().await?;
        if res.status() != StatusCode::OK {
            return Err(CrocError::UnexpectedStatus(res.status()));
        }

        let mut options = tokio::fs::OpenOptions::new();
        options.create(true).write(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o644);

        let mut file = options.open(&self.name).await?;
        while let Some(chunk) = res.chunk().await? {
            file.write_all(&chunk).await?;
        }

        file.flush().await?;
        Ok(())
    }
}

/// Posts a local file to a one-shot upload URL as a multipart form.
///
/// Returned by [`FilesClient::upload`]. Set [`path`] before executing;
/// the URL is single-use.
///
/// [`path`]: Uploader::path
#[derive(Debug, Clone)]
pub struct Uploader {
    session: Session,
    url: String,
    /// Local file to upload.
    pub path: String,
}

impl Uploader {
    /// The one-shot URL handed out by the panel.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Reads [`path`] and posts it as the form part named `files`, with
    /// the file's basename as the part filename. Expects HTTP 200.
    ///
    /// [`path`]: Uploader::path
    pub async fn execute(&self) -> Result<()> {
        if self.path.is_empty() {
            return Err(CrocError::MissingFilePath);
        }

        let info = match tokio::fs::metadata(&self.path).await {
            Ok(info) => info,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(CrocError::FilePathNotFound);
            }
            Err(err) => return Err(err.into()),
        };

        if info.is_dir() {
            return Err(CrocError::PathIsDirectory);
        }

        let name = Path::new(&self.path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.clone());

        let content = tokio::fs::read(&self.path).await?;
        let part = multipart::Part::bytes(content).file_name(name);
        let form = multipart::Form::new().part("files", part);

        let res = self
            .session
            .http()
            .post(&self.url)
            .multipart(form)
            .send()
            .await?;

        if res.status() != StatusCode::OK {
            return Err(CrocError::UnexpectedStatus(res.status()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_path() {
        assert_eq!(split_path("/logs/latest.log"), ("/logs", "latest.log"));
        assert_eq!(split_path("/server.jar"), ("/", "server.jar"));
        assert_eq!(split_path("server.jar"), ("/", "server.jar"));
        assert_eq!(split_path("/a/b/c.txt"), ("/a/b", "c.txt"));
    }

    #[test]
    fn test_files_client_creation() {
        let client = crate::Client::new("https://panel.example", "key").unwrap();
        let _files = client.files();
    }
}

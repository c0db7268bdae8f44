//! Shared helpers for CLI integration tests.

#![allow(dead_code)]

use std::fs;
use std::io::{self, BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::mpsc;
use std::thread;

use flate2::write::GzEncoder;
use flate2::Compression;
use tar::{Builder, EntryType, Header};
use tempfile::TempDir;

pub const APPSPEC: &str = "version: 0.0\nos: linux\n";

/// Isolated base directory, config file and fake agent
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn base_dir(&self) -> PathBuf {
        self.path().join("home")
    }

    pub fn config_path(&self) -> PathBuf {
        self.path().join("multideployer.yaml")
    }

    pub fn write_config(&self, contents: &str) {
        fs::write(self.config_path(), contents).unwrap();
    }

    /// Shell script standing in for `codedeploy-local`; appends each
    /// invocation's deployment group to `agent.log`.
    #[cfg(unix)]
    pub fn fake_agent(&self) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.path().join("codedeploy-local");
        let log = self.path().join("agent.log");
        fs::write(
            &path,
            format!(
                "#!/bin/sh\necho \"$GIT_COMMIT $6\" >> '{}'\necho 'Your local deployment succeeded'\n",
                log.display()
            ),
        )
        .unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    pub fn agent_log(&self) -> String {
        fs::read_to_string(self.path().join("agent.log")).unwrap_or_default()
    }

    pub fn state_file(&self) -> String {
        fs::read_to_string(self.base_dir().join("last_state.yaml")).unwrap_or_default()
    }

    /// Run the binary with the environment pinned to this test
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_multideployer"))
            .current_dir(self.path())
            .arg("--config")
            .arg(self.config_path())
            .arg("--base-dir")
            .arg(self.base_dir())
            .args(args)
            .env_remove("RUST_LOG")
            .env_remove("GITHUB_TOKEN")
            .env_remove("GITHUB_API_URL")
            .env_remove("CODEDEPLOY_LOCAL_PATH")
            .env_remove("MULTIDEPLOYER_HOME")
            .env_remove("HTTP_PROXY")
            .env_remove("http_proxy")
            .env_remove("HTTPS_PROXY")
            .env_remove("https_proxy")
            .env_remove("ALL_PROXY")
            .env_remove("all_proxy")
            .output()
            .unwrap()
    }
}

pub fn combined_output(output: &Output) -> String {
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    text
}

/// Whether the test process runs with root privileges
pub fn is_root() -> bool {
    nix::unistd::Uid::effective().is_root()
}

/// Gzipped tarball with a single top-level directory, as GitHub serves it
pub fn tarball(files: &[(&str, &str)]) -> Vec<u8> {
    let mut builder = Builder::new(GzEncoder::new(Vec::new(), Compression::default()));

    let mut dir = Header::new_gnu();
    dir.set_entry_type(EntryType::Directory);
    dir.set_mode(0o755);
    dir.set_size(0);
    builder
        .append_data(&mut dir, "acme-repo-0000000/", io::empty())
        .unwrap();

    for (path, contents) in files {
        let mut header = Header::new_gnu();
        header.set_size(contents.len() as u64);
        header.set_mode(0o644);
        builder
            .append_data(
                &mut header,
                format!("acme-repo-0000000/{}", path),
                contents.as_bytes(),
            )
            .unwrap();
    }

    builder.into_inner().unwrap().finish().unwrap()
}

/// Serve `body` with 200 OK to every request; request lines are sent back.
pub fn serve_forever(body: Vec<u8>) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        for stream in listener.incoming() {
            let mut stream = match stream {
                Ok(stream) => stream,
                Err(_) => break,
            };
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                if line == "\r\n" || line.is_empty() {
                    break;
                }
            }
            let _ = tx.send(request_line.trim_end().to_string());

            write!(
                stream,
                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            )
            .unwrap();
            stream.write_all(&body).unwrap();
        }
    });

    (format!("http://{}", addr), rx)
}

//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use git2::{Oid, Repository, Signature};

use czar::commit::{CommandOutput, Host, VcsPort};
use czar::error::CommitError;
use czar::wizard::{Choice, LengthRule, PromptPort};

/// A scripted answer for one prompt.
#[derive(Debug, Clone)]
pub enum Reply {
    /// Pick the option whose label matches.
    Pick(&'static str),
    /// Type this text. Replies rejected by the prompt's rule are skipped,
    /// like a user retyping after a validation message.
    Text(&'static str),
    Cancel,
}

/// A prompt that replays scripted replies and records every question.
pub struct ScriptedPrompt {
    replies: Mutex<VecDeque<Reply>>,
    asked: Mutex<Vec<String>>,
    rejections: Mutex<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            asked: Mutex::new(Vec::new()),
            rejections: Mutex::new(Vec::new()),
        }
    }

    /// Questions asked so far, in order.
    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }

    /// Validation messages shown for rejected input.
    pub fn rejections(&self) -> Vec<String> {
        self.rejections.lock().unwrap().clone()
    }

    /// Replies never consumed.
    pub fn remaining(&self) -> usize {
        self.replies.lock().unwrap().len()
    }

    fn next_reply(&self) -> Reply {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("prompt asked more questions than scripted")
    }
}

impl PromptPort for ScriptedPrompt {
    fn choose_one(&self, question: &str, options: &[Choice]) -> Option<Choice> {
        self.asked.lock().unwrap().push(question.to_string());
        match self.next_reply() {
            Reply::Pick(label) => Some(
                options
                    .iter()
                    .find(|c| c.label == label)
                    .unwrap_or_else(|| panic!("no option labelled {label}"))
                    .clone(),
            ),
            Reply::Cancel => None,
            Reply::Text(text) => panic!("text reply {text:?} for choice prompt {question:?}"),
        }
    }

    fn ask_text(&self, question: &str, rule: Option<LengthRule>) -> Option<String> {
        self.asked.lock().unwrap().push(question.to_string());
        loop {
            match self.next_reply() {
                Reply::Text(text) => match rule.map(|r| r.check(text)) {
                    Some(Err(message)) => self.rejections.lock().unwrap().push(message),
                    _ => return Some(text.to_string()),
                },
                Reply::Cancel => return None,
                Reply::Pick(label) => panic!("pick {label:?} for text prompt {question:?}"),
            }
        }
    }
}

/// A VCS that answers every command with a fixed result and records calls.
pub struct FakeVcs {
    staged: String,
    commit_exit_code: i32,
    pub calls: Mutex<Vec<Vec<String>>>,
}

impl FakeVcs {
    pub fn new(staged: &str, commit_exit_code: i32) -> Self {
        Self {
            staged: staged.to_string(),
            commit_exit_code,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn commit_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| c.first().map(String::as_str) == Some("commit"))
            .count()
    }
}

#[async_trait]
impl VcsPort for FakeVcs {
    async fn run(&self, args: &[String], _cwd: &Path) -> Result<CommandOutput, CommitError> {
        self.calls.lock().unwrap().push(args.to_vec());
        let output = match args.first().map(String::as_str) {
            Some("diff") => CommandOutput {
                exit_code: 0,
                stdout: self.staged.clone(),
                stderr: String::new(),
            },
            Some("commit") => CommandOutput {
                exit_code: self.commit_exit_code,
                stdout: "[main 1a2b3c4] commit\n".to_string(),
                stderr: if self.commit_exit_code == 0 {
                    String::new()
                } else {
                    "hook rejected commit".to_string()
                },
            },
            _ => CommandOutput::default(),
        };
        Ok(output)
    }
}

/// A host that counts each action.
#[derive(Default)]
pub struct CountingHost {
    pub stage_all: AtomicU32,
    pub refresh: AtomicU32,
    pub sync: AtomicU32,
    pub errors: Mutex<Vec<String>>,
}

impl CountingHost {
    pub fn count(counter: &AtomicU32) -> u32 {
        counter.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Host for CountingHost {
    async fn stage_all(&self, _cwd: &Path) -> Result<(), CommitError> {
        self.stage_all.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn refresh(&self, _cwd: &Path) -> Result<(), CommitError> {
        self.refresh.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn sync(&self, _cwd: &Path) -> Result<(), CommitError> {
        self.sync.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn notify_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

/// A test git repository builder for integration tests.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new git repository with user config and one initial commit.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");

        let mut config = repo.config().expect("Failed to open repo config");
        config
            .set_str("user.name", "Test User")
            .expect("Failed to set user.name");
        config
            .set_str("user.email", "test@example.com")
            .expect("Failed to set user.email");
        config
            .set_bool("commit.gpgsign", false)
            .expect("Failed to disable signing");

        let test_repo = Self { dir, repo };
        test_repo.initial_commit();
        test_repo
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    fn initial_commit(&self) -> Oid {
        let sig = Signature::now("Test User", "test@example.com").expect("Failed to create signature");
        let tree_id = self
            .repo
            .index()
            .expect("Failed to get index")
            .write_tree()
            .expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");
        self.repo
            .commit(Some("HEAD"), &sig, &sig, "init", &tree, &[])
            .expect("Failed to create commit")
    }

    /// Write a file in the working tree without staging it.
    pub fn write_file(&self, name: &str, content: &str) {
        std::fs::write(self.dir.path().join(name), content).expect("Failed to write test file");
    }

    /// Write a file and add it to the index.
    pub fn stage_file(&self, name: &str, content: &str) {
        self.write_file(name, content);
        let mut index = self.repo.index().expect("Failed to get index");
        index
            .add_path(Path::new(name))
            .expect("Failed to add file");
        index.write().expect("Failed to write index");
    }

    /// Message of the commit HEAD points to.
    pub fn head_message(&self) -> String {
        self.repo
            .head()
            .and_then(|h| h.peel_to_commit())
            .expect("Failed to read HEAD")
            .message()
            .unwrap_or("")
            .to_string()
    }

    /// Paths in the HEAD tree.
    pub fn head_files(&self) -> Vec<String> {
        let tree = self
            .repo
            .head()
            .and_then(|h| h.peel_to_tree())
            .expect("Failed to read HEAD tree");
        tree.iter()
            .filter_map(|entry| entry.name().map(String::from))
            .collect()
    }

    pub fn commit_count(&self) -> usize {
        let mut revwalk = self.repo.revwalk().expect("Failed to create revwalk");
        revwalk.push_head().expect("Failed to push HEAD");
        revwalk.count()
    }
}

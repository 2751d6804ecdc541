//! Shared fixtures for jotter-api integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Duration;
use uuid::Uuid;

use jotter_api::{build_router, AppState};
use jotter_core::{Error, GenerationBackend, Note, NoteRepository, Result, UpdateNoteRequest};
use jotter_inference::{MockGenerationBackend, Summarizer};

/// In-memory note store with the same semantics as the Postgres repository.
#[derive(Clone, Default)]
pub struct InMemoryNoteRepository {
    notes: Arc<Mutex<Vec<Note>>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail as if the database were down.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.notes.lock().unwrap().len()
    }

    fn check(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(Error::Database(sqlx::Error::PoolTimedOut))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl NoteRepository for InMemoryNoteRepository {
    async fn insert(&self, note: Note) -> Result<Note> {
        self.check()?;
        self.notes.lock().unwrap().push(note.clone());
        Ok(note)
    }

    async fn fetch(&self, id: Uuid) -> Result<Note> {
        self.check()?;
        self.notes
            .lock()
            .unwrap()
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or(Error::NoteNotFound(id))
    }

    async fn list(&self) -> Result<Vec<Note>> {
        self.check()?;
        let mut notes = self.notes.lock().unwrap().clone();
        notes.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(notes)
    }

    async fn update(&self, id: Uuid, req: UpdateNoteRequest) -> Result<Note> {
        self.check()?;
        let mut notes = self.notes.lock().unwrap();
        let note = notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(Error::NoteNotFound(id))?;
        note.title = req.title;
        note.content = req.content;
        note.ai_summary = Some(req.ai_summary);
        note.updated_at = Some(req.updated_at.max(note.created_at + Duration::microseconds(1)));
        Ok(note.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.check()?;
        let mut notes = self.notes.lock().unwrap();
        let before = notes.len();
        notes.retain(|n| n.id != id);
        if notes.len() == before {
            return Err(Error::NoteNotFound(id));
        }
        Ok(())
    }

    async fn exists(&self, id: Uuid) -> Result<bool> {
        self.check()?;
        Ok(self.notes.lock().unwrap().iter().any(|n| n.id == id))
    }

    async fn ping(&self) -> Result<()> {
        self.check()
    }
}

/// Summarizer over a single mock provider.
pub fn summarizer_with(provider: &MockGenerationBackend, max_words: usize) -> Summarizer {
    let provider: Arc<dyn GenerationBackend> = Arc::new(provider.clone());
    Summarizer::new(vec![provider], max_words)
}

/// A running test server.
pub struct TestServer {
    pub base_url: String,
    pub client: reqwest::Client,
    pub repo: InMemoryNoteRepository,
    pub provider: MockGenerationBackend,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Spawn the full router on an ephemeral port with a mock summarizer.
pub async fn spawn_server() -> TestServer {
    spawn_server_with(MockGenerationBackend::new().with_fixed_response("mocked summary"), 1000).await
}

pub async fn spawn_server_with(provider: MockGenerationBackend, max_words: usize) -> TestServer {
    let repo = InMemoryNoteRepository::new();
    let state = AppState::new(
        Arc::new(repo.clone()),
        summarizer_with(&provider, max_words),
    );
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    TestServer {
        base_url: format!("http://{}", addr),
        client: reqwest::Client::new(),
        repo,
        provider,
    }
}

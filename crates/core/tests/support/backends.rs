//! Scripted generation backends and a fixed clock.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use skylark_core::insight::{GenerationRequest, GenerationResult};
use skylark_core::{Clock, GenerationBackend};

/// Backend that returns a fixed result and records every request it sees
pub struct ScriptedBackend {
    name: String,
    reply: GenerationResult<String>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedBackend {
    pub fn new(name: &str, reply: GenerationResult<String>) -> Arc<Self> {
        Arc::new(Self { name: name.to_string(), reply, requests: Mutex::new(Vec::new()) })
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().expect("requests lock poisoned").clone()
    }

    pub fn calls(&self) -> usize {
        self.requests().len()
    }
}

#[async_trait]
impl GenerationBackend for ScriptedBackend {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate(&self, request: &GenerationRequest) -> GenerationResult<String> {
        self.requests.lock().expect("requests lock poisoned").push(request.clone());
        self.reply.clone()
    }
}

/// Clock pinned to one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn at(year: i32, month: u32, day: u32) -> Arc<Self> {
        let instant = Utc
            .with_ymd_and_hms(year, month, day, 12, 0, 0)
            .single()
            .expect("valid fixed clock date");
        Arc::new(Self(instant))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

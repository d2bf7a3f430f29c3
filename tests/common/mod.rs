#![allow(dead_code)]

pub use fox_bridge::prelude::*;

use async_trait::async_trait;
use chrono::NaiveTime;
use fox_bridge::fox::FoxModbusService;
use std::sync::{Arc, Mutex};

pub fn common_setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Write {
    pub address: u16,
    pub values: Vec<u16>,
}

/// Records every write and answers reads with a canned reply.
#[derive(Default)]
pub struct MockTransport {
    writes: Mutex<Vec<Write>>,
    reads: Mutex<Vec<(u16, u16)>>,
    read_reply: Mutex<Vec<u16>>,
    fail_with: Mutex<Option<String>>,
}

impl MockTransport {
    pub fn writes(&self) -> Vec<Write> {
        self.writes.lock().unwrap().clone()
    }

    pub fn reads(&self) -> Vec<(u16, u16)> {
        self.reads.lock().unwrap().clone()
    }

    pub fn reply_with(&self, values: Vec<u16>) {
        *self.read_reply.lock().unwrap() = values;
    }

    pub fn fail_with(&self, message: &str) {
        *self.fail_with.lock().unwrap() = Some(message.to_string());
    }

    fn check_failure(&self) -> Result<()> {
        match self.fail_with.lock().unwrap().as_ref() {
            Some(message) => bail!("{}", message),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn write_registers(&self, address: u16, values: &[u16]) -> Result<()> {
        self.check_failure()?;
        self.writes.lock().unwrap().push(Write {
            address,
            values: values.to_vec(),
        });
        Ok(())
    }

    async fn read_input_registers(&self, address: u16, count: u16) -> Result<Vec<u16>> {
        self.check_failure()?;
        self.reads.lock().unwrap().push((address, count));
        Ok(self.read_reply.lock().unwrap().clone())
    }
}

pub struct Factory;

impl Factory {
    pub fn off_peak_start() -> NaiveTime {
        NaiveTime::from_hms_opt(0, 30, 0).unwrap()
    }

    pub fn off_peak_end() -> NaiveTime {
        NaiveTime::from_hms_opt(4, 30, 0).unwrap()
    }

    pub fn service() -> (Arc<MockTransport>, FoxModbusService) {
        let transport = Arc::new(MockTransport::default());
        let service = FoxModbusService::with_default_min_soc(
            transport.clone(),
            Self::off_peak_start(),
            Self::off_peak_end(),
        );
        (transport, service)
    }

    pub fn coordinator() -> (Arc<MockTransport>, Coordinator) {
        let (transport, service) = Self::service();
        (transport, Coordinator::new(Arc::new(service)))
    }
}

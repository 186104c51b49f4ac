//! Test doubles shared by the unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use thiserror::Error;

use crate::address::Address;
use crate::hw_trait::I2cBus;
use crate::i2c::I2cDevice;

/// Fill byte for reads nobody scripted.
pub(crate) const IDLE_BYTE: u8 = 0xA5;

/// One call observed by [`RecordingBus`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BusCall {
    Attach {
        address: Address,
        name: String,
    },
    Transmit {
        address: Address,
        data: Vec<u8>,
        receive_length: usize,
        count: usize,
    },
    Read {
        address: Address,
        receive_length: usize,
    },
    Write {
        address: Address,
        data: Vec<u8>,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum FakeBusError {
    #[error("NACK from {0}")]
    Nack(Address),
    #[error("Transfer timed out")]
    Timeout,
}

/// Bus that logs every call and answers from a script.
///
/// Reads and transmits pop the next scripted reply, or fall back to
/// `receive_length * count` bytes of [`IDLE_BYTE`]. Writes answer with the
/// number of bytes written.
#[derive(Default)]
pub(crate) struct RecordingBus {
    calls: RefCell<Vec<BusCall>>,
    replies: RefCell<VecDeque<Vec<u8>>>,
    failure: RefCell<Option<FakeBusError>>,
}

impl RecordingBus {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn calls(&self) -> Vec<BusCall> {
        self.calls.borrow().clone()
    }

    pub(crate) fn attach_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, BusCall::Attach { .. }))
            .count()
    }

    pub(crate) fn push_reply(&self, reply: &[u8]) {
        self.replies.borrow_mut().push_back(reply.to_vec());
    }

    /// Make the next transfer fail with `error`.
    pub(crate) fn fail_next(&self, error: FakeBusError) {
        *self.failure.borrow_mut() = Some(error);
    }

    fn record(&self, call: BusCall) -> Result<(), FakeBusError> {
        self.calls.borrow_mut().push(call);
        match self.failure.borrow_mut().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn reply(&self, len: usize) -> Vec<u8> {
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| vec![IDLE_BYTE; len])
    }
}

impl I2cBus for RecordingBus {
    type Error = FakeBusError;
    type WriteOutput = usize;

    fn attach_device(&self, device: &I2cDevice<'_, Self>) {
        self.calls.borrow_mut().push(BusCall::Attach {
            address: device.address(),
            name: device.name().to_string(),
        });
    }

    fn transmit(
        &self,
        address: Address,
        data: &[u8],
        receive_length: usize,
        count: usize,
    ) -> Result<Vec<u8>, Self::Error> {
        self.record(BusCall::Transmit {
            address,
            data: data.to_vec(),
            receive_length,
            count,
        })?;
        Ok(self.reply(receive_length * count))
    }

    fn read(&self, address: Address, receive_length: usize) -> Result<Vec<u8>, Self::Error> {
        self.record(BusCall::Read {
            address,
            receive_length,
        })?;
        Ok(self.reply(receive_length))
    }

    fn write(&self, address: Address, data: &[u8]) -> Result<usize, Self::Error> {
        self.record(BusCall::Write {
            address,
            data: data.to_vec(),
        })?;
        Ok(data.len())
    }
}

pub(crate) fn addr(raw: u8) -> Address {
    Address::try_from(raw).unwrap()
}

/// Route crate events to the test harness; filter with RUST_LOG.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

//! pcap-backed capture provider

use crate::provider::{CaptureConfig, CaptureHandle, CaptureProvider, FrameRead, RawFrame};
use netscope_core::{Error, Result};
use pcap::{Active, Capture, Device};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::{debug, info};

/// Capture provider backed by libpcap
pub struct PcapProvider;

impl CaptureProvider for PcapProvider {
    fn open(&self, device: &str, config: &CaptureConfig) -> Result<Box<dyn CaptureHandle>> {
        debug!(device = %device, "opening pcap capture");

        let capture = Capture::from_device(Device::from(device))
            .map_err(|e| Error::device_open(device, e.to_string()))?
            .promisc(config.promiscuous)
            .snaplen(config.snaplen)
            .timeout(config.timeout_ms)
            .immediate_mode(config.immediate_mode)
            .open()
            .map_err(|e| Error::device_open(device, e.to_string()))?;

        info!(device = %device, "pcap capture opened");

        Ok(Box::new(PcapHandle {
            capture,
            device: device.to_string(),
        }))
    }
}

/// An open pcap capture; the device is closed on drop
struct PcapHandle {
    capture: Capture<Active>,
    device: String,
}

impl CaptureHandle for PcapHandle {
    fn set_filter(&mut self, bpf: &str) -> Result<()> {
        self.capture
            .filter(bpf, true)
            .map_err(|e| Error::filter_compile(bpf, e.to_string()))?;
        debug!(device = %self.device, filter = %bpf, "capture filter applied");
        Ok(())
    }

    fn next_frame(&mut self) -> Result<FrameRead> {
        match self.capture.next_packet() {
            Ok(packet) => {
                let header = *packet.header;
                Ok(FrameRead::Frame(RawFrame {
                    // timeval field widths vary by platform
                    timestamp: timeval_to_system_time(header.ts.tv_sec as i64, header.ts.tv_usec as i64),
                    data: packet.data.to_vec(),
                    wire_len: header.len as usize,
                }))
            }
            Err(pcap::Error::TimeoutExpired) => Ok(FrameRead::TimedOut),
            Err(pcap::Error::NoMorePackets) => Ok(FrameRead::Closed),
            Err(e) => Err(Error::capture(e.to_string())),
        }
    }
}

fn timeval_to_system_time(tv_sec: i64, tv_usec: i64) -> SystemTime {
    UNIX_EPOCH + Duration::new(tv_sec.max(0) as u64, (tv_usec.max(0) as u32) * 1_000)
}

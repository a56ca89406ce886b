//! Integration tests: serial reader → OutputMirror → actuator.

use ledbridge::app::events::BridgeEvent;
use ledbridge::drivers::output_mirror::OutputMirror;
use ledbridge::error::{Error, LinkError};
use ledbridge::shutdown::Shutdown;
use std::sync::Arc;

use super::mock_hw::{ActuatorCall, MockActuator, MockLink, RecordingSink, wait_until};

#[test]
fn only_ascii_one_turns_output_on() {
    let actuator = MockActuator::new();
    let mut mirror = OutputMirror::new(actuator.clone());

    for (byte, expected) in [
        (b'1', true),
        (b'0', false),
        (b'1', true),
        (b'x', false),
        (b'1', true),
        (0x00, false),
        (b'1', true),
        (b'Z', false),
    ] {
        assert_eq!(mirror.apply(byte).unwrap(), expected, "byte 0x{byte:02x}");
        assert_eq!(actuator.level(), Some(expected));
    }
    assert_eq!(mirror.mirrored(), 8);
}

#[test]
fn run_mirrors_injected_bytes_until_shutdown() {
    let link = MockLink::new();
    let actuator = MockActuator::new();
    let sink = RecordingSink::new();
    let shutdown = Arc::new(Shutdown::new());

    let worker = {
        let mut link = link.clone();
        let actuator = actuator.clone();
        let mut sink = sink.clone();
        let shutdown = Arc::clone(&shutdown);
        std::thread::spawn(move || {
            let mut mirror = OutputMirror::new(actuator);
            mirror.run(&mut link, &shutdown, &mut sink)
        })
    };

    link.inject(b'1');
    assert!(wait_until(|| actuator.level() == Some(true)));
    link.inject(b'0');
    assert!(wait_until(|| actuator.level() == Some(false)));

    shutdown.request();
    let mirrored = worker.join().unwrap().unwrap();
    assert_eq!(mirrored, 2);
    assert_eq!(
        sink.events(),
        vec![
            BridgeEvent::OutputSet { byte: b'1', on: true },
            BridgeEvent::OutputSet { byte: b'0', on: false },
        ]
    );
}

#[test]
fn read_error_stops_without_release() {
    let mut link = MockLink::new();
    let actuator = MockActuator::new();
    let shutdown = Shutdown::new();

    let mut mirror = OutputMirror::new(actuator.clone());
    mirror.apply(b'1').unwrap();
    link.fail_reads();

    let err = mirror
        .run(&mut link, &shutdown, &mut RecordingSink::new())
        .unwrap_err();
    assert_eq!(err, Error::Link(LinkError::ReadFailed));
    assert_eq!(actuator.calls(), vec![ActuatorCall::SetOutput(true)]);
}

#[test]
fn release_is_final_write() {
    let actuator = MockActuator::new();
    let mut mirror = OutputMirror::new(actuator.clone());
    mirror.apply(b'1').unwrap();
    mirror.release().unwrap();
    assert_eq!(
        actuator.calls(),
        vec![ActuatorCall::SetOutput(true), ActuatorCall::Release]
    );
}

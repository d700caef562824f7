/*
 * @Author       : 老董
 * @Date         : 2026-03-06 15:40:09
 * @Description  : 网络事件：类型、时机与通知顺序测试
 */

use super::linear_neuron;
use crate::nn::{Network, NetworkEvent};
use ndarray::arr1;
use std::sync::{Arc, Mutex};

fn recording_listener(
    log: &Arc<Mutex<Vec<NetworkEvent>>>,
) -> Box<dyn FnMut(&NetworkEvent) + Send> {
    let log = Arc::clone(log);
    Box::new(move |event| log.lock().unwrap().push(*event))
}

#[test]
fn test_structure_and_calculate_events() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut network = Network::new();
    network.add_listener(recording_listener(&log));

    let inputs = network.add_layer(vec![linear_neuron()]);
    let outputs = network.add_layer(vec![linear_neuron()]);
    network.connect(inputs[0], outputs[0]).unwrap();
    network.set_input_neurons(inputs).unwrap();
    network.set_output_neurons(outputs).unwrap();
    network.set_input(&arr1(&[1.0])).unwrap();
    network.calculate();
    network.remove_layer(1).unwrap();

    assert_eq!(
        *log.lock().unwrap(),
        vec![
            NetworkEvent::LayerAdded { index: 0 },
            NetworkEvent::LayerAdded { index: 1 },
            NetworkEvent::Calculated,
            NetworkEvent::LayerRemoved { index: 1 },
        ]
    );
}

#[test]
fn test_listeners_notified_in_registration_order() {
    let order = Arc::new(Mutex::new(Vec::new()));
    let mut network = Network::new();
    for tag in 0..3 {
        let order = Arc::clone(&order);
        network.add_listener(Box::new(move |_event| order.lock().unwrap().push(tag)));
    }
    network.add_layer(vec![linear_neuron()]);
    assert_eq!(*order.lock().unwrap(), vec![0, 1, 2]);
}

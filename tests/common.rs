use std::sync::{Arc, Mutex};

#[allow(unused)]
pub fn init_tracing() { let _ = tracing_subscriber::fmt::try_init(); }

#[allow(unused)]
pub fn collector<T: Send + Sync + 'static>() -> (Box<dyn Fn(T) + Send + Sync>, Box<dyn Fn() -> Vec<T> + Send + Sync>) {
    let collected = Arc::new(Mutex::new(Vec::new()));
    let record = {
        let collected = collected.clone();
        Box::new(move |value: T| {
            collected.lock().unwrap().push(value);
        })
    };

    let drain = Box::new(move || {
        let collected: Vec<T> = collected.lock().unwrap().drain(..).collect();
        collected
    });

    (record, drain)
}

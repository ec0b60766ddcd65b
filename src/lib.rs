/*!
A weak multicast listener registry.

[`ListenerRegistry`] holds a dynamic set of listeners conforming to a capability
set (a trait), broadcasts an arbitrary operation to all of them, and drops a
listener automatically once nothing else keeps it alive. Registration is
non-owning: the registry is never the reason a listener stays alive, and removal
is by object identity rather than value equality.

# Basic usage

```rust
use std::sync::Arc;
use listener_registry::ListenerRegistry;

trait Responder {
    fn respond(&self, event: &str) -> String;
}

struct Police;
impl Responder for Police {
    fn respond(&self, event: &str) -> String { format!("notify police: {event}") }
}

let mut registry: ListenerRegistry<dyn Responder> = ListenerRegistry::new();
let police: Arc<dyn Responder> = Arc::new(Police);
registry.add_listener(&police);

let mut notices = Vec::new();
registry.notify_all(|responder| notices.push(responder.respond("fire at HOME")));
assert_eq!(notices, ["notify police: fire at HOME"]);

// dropping the last strong reference expires the registration
drop(police);
assert_eq!(registry.live_count(), 0);
```
*/

mod handle;
mod registry;

pub use handle::*;
pub use registry::*;

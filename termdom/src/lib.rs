pub mod buffer;
pub mod dispatch;
pub mod element;
pub mod event;
pub mod focus;
pub mod hit;
pub mod layout;
pub mod listener;
pub mod render;
pub mod style;
pub mod terminal;
pub mod text;

pub use buffer::{Buffer, Cell};
pub use dispatch::{bubble, path_to, Propagation};
pub use element::{find_element, Content, Element};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use focus::{collect_focusable, FocusState};
pub use hit::{hit_test, hit_test_any, hit_test_focusable};
pub use layout::{layout, LayoutResult, Rect};
pub use listener::{KeyListeners, ListenerGuard};
pub use render::render_to_buffer;
pub use style::{Color, Direction, Style, TextStyle};
pub use terminal::Terminal;

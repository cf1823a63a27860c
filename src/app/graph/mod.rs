mod edge;
mod interaction;
mod view;

pub(super) use edge::EdgeKey;

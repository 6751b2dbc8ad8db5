use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

pub fn get_node_path(node: &Rc<RefCell<Node>>) -> String {
    let mut path = format!("/{}", node.borrow().name);
    let mut parent = node.borrow().parent.as_ref().and_then(|x| x.upgrade());
    while let Some(current) = parent {
        path = format!("/{}{}", current.borrow().name, path);
        parent = current.borrow().parent.as_ref().and_then(|x| x.upgrade());
    }
    path
}

pub struct Node {
    pub name: String,
    pub path: String,
    pub parent: Option<Weak<RefCell<Node>>>,
    pub children: Vec<Rc<RefCell<Node>>>,
    pub transformation: glam::Mat4,
    pub meshes: Vec<usize>,
}

impl Node {
    pub fn new(name: &str, transformation: glam::Mat4) -> Node {
        Node {
            name: name.to_string(),
            path: format!("/{}", name),
            parent: None,
            children: vec![],
            transformation,
            meshes: vec![],
        }
    }
}

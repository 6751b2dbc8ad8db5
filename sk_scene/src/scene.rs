use crate::{animation::Animation, mesh::Mesh, node::Node};
use std::{cell::RefCell, collections::HashMap, rc::Rc};

pub fn walk_node<F>(node: &Rc<RefCell<Node>>, f: &mut F)
where
    F: FnMut(&Rc<RefCell<Node>>),
{
    f(node);
    let children = node.borrow().children.clone();
    for item in &children {
        walk_node(item, f);
    }
}

pub struct Scene {
    pub name: String,
    pub root_node: Option<Rc<RefCell<Node>>>,
    pub all_nodes: HashMap<String, Rc<RefCell<Node>>>,
    pub meshes: Vec<Mesh>,
    pub animations: Vec<Animation>,
}

impl Scene {
    pub fn new(name: &str) -> Scene {
        Scene {
            name: name.to_string(),
            root_node: None,
            all_nodes: HashMap::new(),
            meshes: vec![],
            animations: vec![],
        }
    }

    pub fn add_node(
        &mut self,
        parent: Option<&Rc<RefCell<Node>>>,
        node: Node,
    ) -> Rc<RefCell<Node>> {
        let node = Rc::new(RefCell::new(node));
        match parent {
            Some(parent) => {
                let path = format!("{}/{}", parent.borrow().path, node.borrow().name);
                node.borrow_mut().path = path;
                node.borrow_mut().parent = Some(Rc::downgrade(parent));
                parent.borrow_mut().children.push(node.clone());
            }
            None => {
                if self.root_node.is_some() {
                    log::warn!(
                        "Node `{}` has no parent but the scene root is already set.",
                        node.borrow().name
                    );
                } else {
                    self.root_node = Some(node.clone());
                }
            }
        }
        let path = node.borrow().path.clone();
        if let Some(_) = self.all_nodes.insert(path.clone(), node.clone()) {
            log::warn!("Duplicated node path `{}`.", path);
        }
        node
    }
}

//! DOM helpers for the HTML notes adapter.
//!
//! Thin layer over html5ever's RcDom: parsing a document, locating the body,
//! reducing wrapper elements to their innermost content, and serializing
//! nodes back to markup.

use html5ever::tendril::TendrilSink;
use html5ever::{
    ns, parse_document, serialize, serialize::SerializeOpts, serialize::TraversalScope, Attribute,
    LocalName, ParseOpts, QualName,
};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::{ExtractError, Result};
use crate::tags::extract_tags;

/// Parse an HTML source string into a DOM tree.
pub fn parse_html(source: &str) -> RcDom {
    parse_document(RcDom::default(), ParseOpts::default()).one(source)
}

/// Direct element children of the document body, in document order.
///
/// Text and comment nodes between elements are skipped. A document without a
/// body yields an empty sequence.
pub fn body_children(dom: &RcDom) -> Vec<Handle> {
    let Some(body) = find_element(&dom.document, "body") else {
        return Vec::new();
    };
    let children = body.children.borrow();
    children
        .iter()
        .filter(|child| matches!(child.data, NodeData::Element { .. }))
        .cloned()
        .collect()
}

fn find_element(node: &Handle, tag: &str) -> Option<Handle> {
    for child in node.children.borrow().iter() {
        if element_name(child).as_deref() == Some(tag) {
            return Some(child.clone());
        }
        if let Some(found) = find_element(child, tag) {
            return Some(found);
        }
    }
    None
}

/// Local name of an element node.
pub fn element_name(node: &Handle) -> Option<String> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref().to_string()),
        _ => None,
    }
}

/// Reduce a node to its innermost meaningful content.
///
/// Descends through wrappers whose only content is a single child element,
/// stopping at the first node with more than one content piece or whose sole
/// content is text. The returned node is a detached copy, safe to mutate
/// without touching the source tree. A node with no content at all is an
/// error rather than an endless descent.
pub fn normalize(node: &Handle) -> Result<Handle> {
    let sole_element_child = {
        let children = node.children.borrow();
        match children.as_slice() {
            [] => return Err(ExtractError::EmptyElement),
            [only] if matches!(only.data, NodeData::Element { .. }) => Some(only.clone()),
            _ => None,
        }
    };

    match sole_element_child {
        Some(child) => normalize(&child),
        None => Ok(deep_clone(node)),
    }
}

/// Detached copy of a node and its subtree.
pub fn deep_clone(node: &Handle) -> Handle {
    let data = match &node.data {
        NodeData::Element { name, attrs, .. } => NodeData::Element {
            name: name.clone(),
            attrs: RefCell::new(attrs.borrow().clone()),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
        NodeData::Text { contents } => NodeData::Text {
            contents: RefCell::new(contents.borrow().clone()),
        },
        NodeData::Comment { contents } => NodeData::Comment {
            contents: contents.clone(),
        },
        NodeData::Doctype {
            name,
            public_id,
            system_id,
        } => NodeData::Doctype {
            name: name.clone(),
            public_id: public_id.clone(),
            system_id: system_id.clone(),
        },
        NodeData::ProcessingInstruction { target, contents } => NodeData::ProcessingInstruction {
            target: target.clone(),
            contents: contents.clone(),
        },
        NodeData::Document => NodeData::Document,
    };

    let clone = Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data,
    });
    for child in node.children.borrow().iter() {
        clone.children.borrow_mut().push(deep_clone(child));
    }
    clone
}

/// Strip all attributes from an element node.
pub fn clear_attributes(node: &Handle) {
    if let NodeData::Element { attrs, .. } = &node.data {
        attrs.borrow_mut().clear();
    }
}

/// Serialize a node (including itself) back to markup text.
pub fn serialize_node(node: &Handle) -> Result<String> {
    let mut output = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };
    let serializable = SerializableHandle::from(node.clone());
    serialize(&mut output, &serializable, opts)?;
    String::from_utf8(output).map_err(|e| ExtractError::Malformed(e.to_string()))
}

/// Strip `#tag` tokens from the immediate text content of a node.
///
/// Normalizes the node first, then rebuilds it with each text fragment
/// replaced by its tag-stripped remainder. Non-text children are carried
/// over untouched. Tags aggregate across fragments in document order.
pub fn extract_node_tags(node: &Handle) -> Result<(Vec<String>, Handle)> {
    let inner = normalize(node)?;
    let name = element_name(&inner)
        .ok_or_else(|| ExtractError::Malformed("normalized node is not an element".into()))?;

    let mut tags = Vec::new();
    let rebuilt = create_element(&name, &[]);
    for child in inner.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => {
                let (found, remaining) = extract_tags(&contents.borrow());
                tags.extend(found);
                rebuilt.children.borrow_mut().push(create_text(&remaining));
            }
            _ => rebuilt.children.borrow_mut().push(child.clone()),
        }
    }

    Ok((tags, rebuilt))
}

/// Create a detached element node with the given attributes.
pub fn create_element(tag: &str, attrs: &[(&str, &str)]) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(*name)),
            value: value.to_string().into(),
        })
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create a detached text node.
pub fn create_text(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use trellis_cli::cli::NodeCommands;
use trellis_core::model;
use trellis_textstore::{Error, TextNodeModel, TextNodeStore};

use super::Session;

pub fn handle(command: &NodeCommands, session: &Session) -> Result<()> {
    match command {
        NodeCommands::Create { id } => {
            let node = match id {
                Some(id) => session.store.create_with_id(id)?,
                None => session.store.create()?,
            };
            session.save()?;
            info!(node = node.id(), "node created");
            println!("{}", node.id());
            Ok(())
        }
        NodeCommands::List => {
            for id in session.store.ids() {
                println!("{id}");
            }
            Ok(())
        }
        NodeCommands::Show { id } => {
            let node = session.store.require(id)?;
            println!("{}", serde_json::to_string_pretty(&node.properties())?);
            Ok(())
        }
        NodeCommands::Get { id, key, default } => {
            // Reading never creates the node.
            let node_model = Arc::new(TextNodeModel::with_options(
                session.store.clone(),
                id.as_str(),
                true,
                false,
            ));
            let property = match default {
                Some(default) => node_model.property_with_default(key, model::of(default.clone())),
                None => node_model.property(key),
            };
            let value = property.value()?.ok_or_else(|| Error::KeyNotFound {
                node: id.clone(),
                key: key.clone(),
            })?;
            println!("{value}");
            Ok(())
        }
        NodeCommands::Set { id, key, value } => {
            let node_model = Arc::new(TextNodeModel::from_config(
                session.store.clone(),
                id.as_str(),
                &session.binding,
            ));
            node_model.property(key).set_value(Some(value))?;
            session.save()?;
            info!(node = %id, key = %key, "property set");
            Ok(())
        }
        NodeCommands::Unset { id, key } => {
            let node_model = Arc::new(TextNodeModel::from_config(
                session.store.clone(),
                id.as_str(),
                &session.binding,
            ));
            node_model.property(key).set_value(None)?;
            session.save()?;
            info!(node = %id, key = %key, "property removed");
            Ok(())
        }
    }
}

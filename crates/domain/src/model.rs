//! Project descriptor model.
//!
//! A [`Model`] maps the commonly edited parts of a `pom.xml` onto typed
//! fields and keeps the rest of the document as an element tree, so a
//! read/modify/write cycle only changes what the caller changed.

use std::path::{Path, PathBuf};

use crate::document::{Element, Node, ProjectDocument, validate_element_name};
use crate::error::{DomainError, DomainResult};
use crate::properties::SortedProperties;

/// Default namespace of a version 4.0.0 descriptor.
pub const POM_NAMESPACE: &str = "http://maven.apache.org/POM/4.0.0";

const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
const POM_SCHEMA_LOCATION: &str =
    "http://maven.apache.org/POM/4.0.0 https://maven.apache.org/xsd/maven-4.0.0.xsd";

/// Relative path Maven assumes when a parent declares none.
pub const DEFAULT_PARENT_RELATIVE_PATH: &str = "../pom.xml";

const DEFAULT_PACKAGING: &str = "jar";
const INHERITED: &str = "[inherited]";

/// Canonical order of the children of `<project>`.
pub const PROJECT_ELEMENT_ORDER: &[&str] = &[
    "modelVersion",
    "parent",
    "groupId",
    "artifactId",
    "version",
    "packaging",
    "name",
    "description",
    "url",
    "inceptionYear",
    "organization",
    "licenses",
    "developers",
    "contributors",
    "mailingLists",
    "prerequisites",
    "modules",
    "scm",
    "issueManagement",
    "ciManagement",
    "distributionManagement",
    "properties",
    "dependencyManagement",
    "dependencies",
    "repositories",
    "pluginRepositories",
    "build",
    "reporting",
    "profiles",
];

const PARENT_ELEMENT_ORDER: &[&str] = &["groupId", "artifactId", "version", "relativePath"];

/// Reference to a parent descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parent {
    /// Parent group identifier.
    pub group_id: Option<String>,
    /// Parent artifact identifier.
    pub artifact_id: Option<String>,
    /// Parent version.
    pub version: Option<String>,
    /// Location of the parent descriptor relative to this one.
    ///
    /// `Some("")` is an explicit empty `<relativePath/>`, which is not the
    /// same as leaving the element out.
    pub relative_path: Option<String>,
}

impl Parent {
    /// Creates a parent reference from its coordinates.
    #[must_use]
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: Some(group_id.into()),
            artifact_id: Some(artifact_id.into()),
            version: Some(version.into()),
            relative_path: None,
        }
    }

    /// Sets the relative path.
    #[must_use]
    pub fn with_relative_path(mut self, relative_path: impl Into<String>) -> Self {
        self.relative_path = Some(relative_path.into());
        self
    }

    /// `groupId:artifactId:pom:version`.
    #[must_use]
    pub fn id(&self) -> String {
        format!(
            "{}:{}:pom:{}",
            self.group_id.as_deref().unwrap_or_default(),
            self.artifact_id.as_deref().unwrap_or_default(),
            self.version.as_deref().unwrap_or_default()
        )
    }

    fn from_element(element: &Element) -> Self {
        Self {
            group_id: element.child_text("groupId"),
            artifact_id: element.child_text("artifactId"),
            version: element.child_text("version"),
            relative_path: element.child_text("relativePath"),
        }
    }

    fn write_into(&self, element: &mut Element) {
        element.set_child_text("groupId", self.group_id.as_deref(), PARENT_ELEMENT_ORDER);
        element.set_child_text(
            "artifactId",
            self.artifact_id.as_deref(),
            PARENT_ELEMENT_ORDER,
        );
        element.set_child_text("version", self.version.as_deref(), PARENT_ELEMENT_ORDER);
        element.set_child_text(
            "relativePath",
            self.relative_path.as_deref(),
            PARENT_ELEMENT_ORDER,
        );
    }
}

/// An in-memory project descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    /// Descriptor format version, normally `4.0.0`.
    pub model_version: Option<String>,
    /// Parent reference; `None` writes no `<parent>` element.
    pub parent: Option<Parent>,
    /// Group identifier.
    pub group_id: Option<String>,
    /// Artifact identifier.
    pub artifact_id: Option<String>,
    /// Version.
    pub version: Option<String>,
    /// Packaging type.
    pub packaging: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// The `<properties>` section, always kept sorted by key.
    pub properties: SortedProperties,
    pom_file: Option<PathBuf>,
    document: ProjectDocument,
}

impl Model {
    /// Creates an empty model with the standard namespace declarations and
    /// no associated location.
    #[must_use]
    pub fn new() -> Self {
        let mut root = Element::new("project");
        root.attributes = vec![
            ("xmlns".to_string(), POM_NAMESPACE.to_string()),
            ("xmlns:xsi".to_string(), XSI_NAMESPACE.to_string()),
            (
                "xsi:schemaLocation".to_string(),
                POM_SCHEMA_LOCATION.to_string(),
            ),
        ];
        Self::blank(ProjectDocument::new(root))
    }

    const fn blank(document: ProjectDocument) -> Self {
        Self {
            model_version: None,
            parent: None,
            group_id: None,
            artifact_id: None,
            version: None,
            packaging: None,
            name: None,
            description: None,
            properties: SortedProperties::new(),
            pom_file: None,
            document,
        }
    }

    /// Builds a model from a parsed document.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NotAProject`] if the root is not `<project>`.
    pub fn from_document(document: ProjectDocument) -> DomainResult<Self> {
        if document.root.name != "project" {
            return Err(DomainError::NotAProject(document.root.name));
        }

        let root = &document.root;
        let model_version = root.child_text("modelVersion");
        let parent = root.child("parent").map(Parent::from_element);
        let group_id = root.child_text("groupId");
        let artifact_id = root.child_text("artifactId");
        let version = root.child_text("version");
        let packaging = root.child_text("packaging");
        let name = root.child_text("name");
        let description = root.child_text("description");
        let properties: SortedProperties = root
            .child("properties")
            .map(|section| {
                section
                    .child_elements()
                    .map(|entry| (entry.name.clone(), entry.text()))
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            model_version,
            parent,
            group_id,
            artifact_id,
            version,
            packaging,
            name,
            description,
            properties,
            pom_file: None,
            document,
        })
    }

    /// Produces the document to serialize, with the typed fields merged back
    /// into the retained element tree.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidElementName`] if a property key cannot
    /// be written as an element name.
    pub fn to_document(&self) -> DomainResult<ProjectDocument> {
        for key in self.properties.keys() {
            validate_element_name(key)?;
        }

        let mut document = self.document.clone();
        let root = &mut document.root;

        let scalars = [
            ("modelVersion", &self.model_version),
            ("groupId", &self.group_id),
            ("artifactId", &self.artifact_id),
            ("version", &self.version),
            ("packaging", &self.packaging),
            ("name", &self.name),
            ("description", &self.description),
        ];
        for (element, value) in scalars {
            root.set_child_text(element, value.as_deref(), PROJECT_ELEMENT_ORDER);
        }

        match &self.parent {
            Some(parent) => {
                root.update_child("parent", PROJECT_ELEMENT_ORDER, |element| {
                    parent.write_into(element);
                });
            }
            None => {
                root.remove_child("parent");
            }
        }

        if self.properties.is_empty() {
            if let Some(section) = root.child_mut("properties") {
                section.children.clear();
            }
        } else {
            root.update_child("properties", PROJECT_ELEMENT_ORDER, |section| {
                section.children = self
                    .properties
                    .iter()
                    .map(|(key, value)| Node::Element(Element::with_text(key, value)))
                    .collect();
            });
        }

        Ok(document)
    }

    /// The retained document as read, without the typed fields merged in.
    #[must_use]
    pub const fn document(&self) -> &ProjectDocument {
        &self.document
    }

    /// The file this model was read from or will be written to by default.
    #[must_use]
    pub fn pom_file(&self) -> Option<&Path> {
        self.pom_file.as_deref()
    }

    /// Sets the default write location.
    pub fn set_pom_file(&mut self, pom_file: impl Into<PathBuf>) {
        self.pom_file = Some(pom_file.into());
    }

    /// Builder form of [`Model::set_pom_file`].
    #[must_use]
    pub fn with_pom_file(mut self, pom_file: impl Into<PathBuf>) -> Self {
        self.set_pom_file(pom_file);
        self
    }

    /// Forgets the default write location.
    pub fn clear_pom_file(&mut self) -> Option<PathBuf> {
        self.pom_file.take()
    }

    /// Directory containing the descriptor, if the model has a location.
    #[must_use]
    pub fn project_directory(&self) -> Option<&Path> {
        self.pom_file.as_deref().and_then(Path::parent)
    }

    /// Group identifier, falling back to the parent's.
    #[must_use]
    pub fn effective_group_id(&self) -> Option<&str> {
        self.group_id
            .as_deref()
            .or_else(|| self.parent.as_ref()?.group_id.as_deref())
    }

    /// Version, falling back to the parent's.
    #[must_use]
    pub fn effective_version(&self) -> Option<&str> {
        self.version
            .as_deref()
            .or_else(|| self.parent.as_ref()?.version.as_deref())
    }

    /// `groupId:artifactId:packaging:version`, with inherited coordinates
    /// resolved from the parent.
    #[must_use]
    pub fn id(&self) -> String {
        format!(
            "{}:{}:{}:{}",
            self.effective_group_id().unwrap_or(INHERITED),
            self.artifact_id.as_deref().unwrap_or_default(),
            self.packaging.as_deref().unwrap_or(DEFAULT_PACKAGING),
            self.effective_version().unwrap_or(INHERITED)
        )
    }

    /// Where the parent descriptor is expected on disk.
    ///
    /// Joins the project directory with the parent's relative path, or
    /// [`DEFAULT_PARENT_RELATIVE_PATH`] when none is declared. A path that
    /// does not end in `.xml` names a directory holding `pom.xml`. The
    /// result is not normalized.
    ///
    /// Returns `None` without a parent, without a location, or when the
    /// relative path is explicitly empty.
    #[must_use]
    pub fn parent_pom_path(&self) -> Option<PathBuf> {
        let parent = self.parent.as_ref()?;
        let directory = self.project_directory()?;
        let relative = parent
            .relative_path
            .as_deref()
            .unwrap_or(DEFAULT_PARENT_RELATIVE_PATH);
        if relative.is_empty() {
            return None;
        }

        let candidate = directory.join(relative);
        let is_file = Path::new(relative)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"));
        Some(if is_file {
            candidate
        } else {
            candidate.join("pom.xml")
        })
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn element_names(element: &Element) -> Vec<&str> {
        element.child_elements().map(|e| e.name.as_str()).collect()
    }

    fn sample_document() -> ProjectDocument {
        let mut parent = Element::new("parent");
        parent.children = vec![
            Node::Element(Element::with_text("groupId", "org.jboss")),
            Node::Element(Element::with_text("artifactId", "jboss-parent")),
            Node::Element(Element::with_text("version", "39")),
            Node::Element(Element::with_text("relativePath", "../../pom.xml")),
        ];
        let mut properties = Element::new("properties");
        properties.children = vec![
            Node::Element(Element::with_text("zeta", "z")),
            Node::Element(Element::with_text("alpha", "a")),
        ];
        let mut dependencies = Element::new("dependencies");
        dependencies
            .children
            .push(Node::Element(Element::new("dependency")));

        let mut root = Element::new("project");
        root.children = vec![
            Node::Element(Element::with_text("modelVersion", "4.0.0")),
            Node::Element(parent),
            Node::Element(Element::with_text("artifactId", "maven-model-helper")),
            Node::Element(properties),
            Node::Element(dependencies),
        ];
        ProjectDocument::new(root)
    }

    #[test]
    fn maps_typed_fields_from_document() {
        let model = Model::from_document(sample_document()).expect("valid project");

        assert_eq!(model.model_version.as_deref(), Some("4.0.0"));
        assert_eq!(model.artifact_id.as_deref(), Some("maven-model-helper"));
        assert_eq!(model.group_id, None);
        let parent = model.parent.as_ref().expect("parent present");
        assert_eq!(parent.group_id.as_deref(), Some("org.jboss"));
        assert_eq!(parent.relative_path.as_deref(), Some("../../pom.xml"));
        assert_eq!(
            model.properties.keys().collect::<Vec<_>>(),
            vec!["alpha", "zeta"]
        );
        assert!(model.pom_file().is_none());
    }

    #[test]
    fn rejects_non_project_root() {
        let document = ProjectDocument::new(Element::new("settings"));
        assert_eq!(
            Model::from_document(document),
            Err(DomainError::NotAProject("settings".to_string()))
        );
    }

    #[test]
    fn new_fields_land_in_canonical_positions() {
        let mut model = Model::from_document(sample_document()).expect("valid project");
        model.group_id = Some("org.example".to_string());
        model.version = Some("1.0".to_string());
        model.packaging = Some("pom".to_string());

        let document = model.to_document().expect("serializable");
        assert_eq!(
            element_names(&document.root),
            vec![
                "modelVersion",
                "parent",
                "groupId",
                "artifactId",
                "version",
                "packaging",
                "properties",
                "dependencies"
            ]
        );
    }

    #[test]
    fn properties_are_regenerated_in_key_order() {
        let mut model = Model::from_document(sample_document()).expect("valid project");
        model.properties.insert("middle", "m");

        let document = model.to_document().expect("serializable");
        let section = document.root.child("properties").expect("properties kept");
        assert_eq!(element_names(section), vec!["alpha", "middle", "zeta"]);
    }

    #[test]
    fn removing_parent_drops_the_element() {
        let mut model = Model::from_document(sample_document()).expect("valid project");
        model.parent = None;

        let document = model.to_document().expect("serializable");
        assert!(document.root.child("parent").is_none());
    }

    #[test]
    fn fresh_model_without_parent_or_properties_has_no_such_sections() {
        let mut model = Model::new();
        model.group_id = Some("org.example".to_string());

        let document = model.to_document().expect("serializable");
        assert_eq!(element_names(&document.root), vec!["groupId"]);
        assert_eq!(document.root.attribute("xmlns"), Some(POM_NAMESPACE));
    }

    #[test]
    fn emptied_properties_keep_an_existing_section() {
        let mut model = Model::from_document(sample_document()).expect("valid project");
        model.properties.clear();

        let document = model.to_document().expect("serializable");
        let section = document.root.child("properties").expect("section kept");
        assert!(section.children.is_empty());
    }

    #[test]
    fn invalid_property_key_is_rejected() {
        let mut model = Model::new();
        model.properties.insert("not a name", "x");
        assert_eq!(
            model.to_document(),
            Err(DomainError::InvalidElementName("not a name".to_string()))
        );
    }

    #[test]
    fn id_inherits_from_parent() {
        let model = Model::from_document(sample_document()).expect("valid project");
        assert_eq!(model.id(), "org.jboss:maven-model-helper:jar:39");
    }

    #[test]
    fn parent_pom_path_resolution() {
        let mut model = Model::from_document(sample_document())
            .expect("valid project")
            .with_pom_file("/work/a/b/pom.xml");
        assert_eq!(
            model.parent_pom_path(),
            Some(PathBuf::from("/work/a/b/../../pom.xml"))
        );

        if let Some(parent) = model.parent.as_mut() {
            parent.relative_path = None;
        }
        assert_eq!(
            model.parent_pom_path(),
            Some(PathBuf::from("/work/a/b/../pom.xml"))
        );

        if let Some(parent) = model.parent.as_mut() {
            parent.relative_path = Some("../shared".to_string());
        }
        assert_eq!(
            model.parent_pom_path(),
            Some(PathBuf::from("/work/a/b/../shared/pom.xml"))
        );

        if let Some(parent) = model.parent.as_mut() {
            parent.relative_path = Some(String::new());
        }
        assert_eq!(model.parent_pom_path(), None);
    }
}

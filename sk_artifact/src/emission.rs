use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq)]
pub enum EPrimitive {
    U16(u16),
    I16(i16),
    U32(u32),
    F32(f32),
    Reference(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum DataChunk {
    Primitive(EPrimitive),
    Structure(Vec<DataChunk>),
}

impl DataChunk {
    pub fn structure() -> DataChunk {
        DataChunk::Structure(vec![])
    }

    pub fn add(&mut self, chunk: DataChunk) {
        match self {
            DataChunk::Structure(children) => {
                children.push(chunk);
            }
            DataChunk::Primitive(_) => {
                log::warn!("Can not add a child chunk to a primitive chunk.");
            }
        }
    }

    pub fn add_primitive(&mut self, value: EPrimitive) {
        self.add(DataChunk::Primitive(value));
    }

    pub fn len(&self) -> usize {
        match self {
            DataChunk::Primitive(_) => 1,
            DataChunk::Structure(children) => children.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecordDefinition {
    pub name: String,
    pub type_name: String,
    pub is_array: bool,
    pub chunk: DataChunk,
}

pub trait EmissionSink {
    fn get_unique_name(&mut self, base: &str) -> String;
    fn add_record(&mut self, record: RecordDefinition);
    fn add_macro(&mut self, name: &str, value: u32);
}

pub fn sanitize_name(name: &str) -> String {
    let name: String = name
        .chars()
        .map(|x| if x.is_ascii_alphanumeric() { x } else { '_' })
        .collect();
    if name.is_empty() {
        return String::from("unnamed");
    }
    name
}

pub fn macro_case(name: &str) -> String {
    sanitize_name(name).to_ascii_uppercase()
}

pub struct MemorySink {
    pub records: Vec<RecordDefinition>,
    pub macros: Vec<(String, u32)>,
    used_names: HashMap<String, usize>,
}

impl MemorySink {
    pub fn new() -> MemorySink {
        MemorySink {
            records: vec![],
            macros: vec![],
            used_names: HashMap::new(),
        }
    }

    pub fn find_record(&self, name: &str) -> Option<&RecordDefinition> {
        self.records.iter().find(|x| x.name == name)
    }

    pub fn find_macro(&self, name: &str) -> Option<u32> {
        self.macros
            .iter()
            .find(|(macro_name, _)| macro_name == name)
            .map(|(_, value)| *value)
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl EmissionSink for MemorySink {
    fn get_unique_name(&mut self, base: &str) -> String {
        let base = sanitize_name(base);
        if !self.used_names.contains_key(&base) {
            self.used_names.insert(base.clone(), 0);
            return base;
        }
        let mut count = self.used_names[&base];
        loop {
            count += 1;
            let name = format!("{}_{}", base, count);
            if !self.used_names.contains_key(&name) {
                self.used_names.insert(base, count);
                self.used_names.insert(name.clone(), 0);
                return name;
            }
        }
    }

    fn add_record(&mut self, record: RecordDefinition) {
        self.records.push(record);
    }

    fn add_macro(&mut self, name: &str, value: u32) {
        self.macros.push((name.to_string(), value));
    }
}

//! ModernBERT sequence-classification backend
//!
//! Weights, config, and tokenizer are fetched from the Hugging Face hub
//! on first load and cached by `hf-hub`. The checkpoint's own `id2label`
//! mapping drives the raw label vocabulary.

use std::collections::HashMap;

use candle_core::{DType, Device, Tensor, D};
use candle_nn::ops::softmax;
use candle_nn::VarBuilder;
use candle_transformers::models::modernbert::{
    ClassifierConfig, ClassifierPooling, Config, ModernBertForSequenceClassification,
};
use hf_hub::{api::sync::Api, Repo, RepoType};
use serde::Deserialize;
use tokenizers::Tokenizer;

use crate::{ClassifierError, RawPrediction, SentimentModel};

/// The `id2label`/`label2id` tables live at the top level of
/// `config.json`, not inside the nested classifier config candle expects.
#[derive(Deserialize)]
struct ClassifierConfigJson {
    #[serde(default)]
    id2label: HashMap<String, String>,
    #[serde(default)]
    label2id: HashMap<String, u32>,
}

pub struct ModernBertSentimentModel {
    model: ModernBertForSequenceClassification,
    tokenizer: Tokenizer,
    device: Device,
    id2label: HashMap<String, String>,
}

impl ModernBertSentimentModel {
    /// Load the checkpoint named by `repo_id` onto `device`.
    pub fn load(repo_id: &str, device: Device) -> Result<Self, ClassifierError> {
        tracing::info!(model = repo_id, "loading sentiment model");

        let api = Api::new().map_err(|e| ClassifierError::ModelLoad(e.to_string()))?;
        let repo = api.repo(Repo::new(repo_id.to_string(), RepoType::Model));

        let fetch = |filename: &str| {
            repo.get(filename).map_err(|e| ClassifierError::Download {
                repo: repo_id.to_string(),
                filename: filename.to_string(),
                message: e.to_string(),
            })
        };

        let config_path = fetch("config.json")?;
        let tokenizer_path = fetch("tokenizer.json")?;
        let weights_path = fetch("model.safetensors").or_else(|_| fetch("pytorch_model.bin"))?;

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| ClassifierError::ModelLoad(e.to_string()))?;
        let mut config: Config = serde_json::from_str(&config_str)
            .map_err(|e| ClassifierError::ModelLoad(e.to_string()))?;
        let class_cfg: ClassifierConfigJson = serde_json::from_str(&config_str)
            .map_err(|e| ClassifierError::ModelLoad(e.to_string()))?;

        let num_labels = class_cfg.label2id.len().max(class_cfg.id2label.len());
        if num_labels == 0 {
            return Err(ClassifierError::ModelLoad(format!(
                "checkpoint '{repo_id}' carries no id2label mapping"
            )));
        }
        patch_classifier_config(&mut config, num_labels);

        let vb = if weights_path.extension().is_some_and(|e| e == "safetensors") {
            unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, &device)? }
        } else {
            VarBuilder::from_pth(&weights_path, DType::F32, &device)?
        };
        let model = ModernBertForSequenceClassification::load(vb, &config)?;

        let tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| ClassifierError::Tokenization(e.to_string()))?;

        tracing::info!(model = repo_id, classes = num_labels, "sentiment model loaded");

        Ok(Self {
            model,
            tokenizer,
            device,
            id2label: class_cfg.id2label,
        })
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    fn label_for(&self, id: u32) -> Result<String, ClassifierError> {
        self.id2label
            .get(&id.to_string())
            .cloned()
            .ok_or(ClassifierError::UnknownLabelId(id))
    }

    /// Single forward pass returning the softmax distribution.
    fn forward_probs(&self, text: &str) -> Result<Vec<f32>, ClassifierError> {
        let encoding = self.tokenizer.encode(text, true).map_err(|e| {
            ClassifierError::Tokenization(format!(
                "failed on '{}': {e}",
                text.chars().take(50).collect::<String>()
            ))
        })?;

        let input_ids = Tensor::new(encoding.get_ids(), &self.device)?.unsqueeze(0)?;
        let attention_mask =
            Tensor::new(encoding.get_attention_mask(), &self.device)?.unsqueeze(0)?;

        let logits = self.model.forward(&input_ids, &attention_mask)?;
        let probs = softmax(&logits, D::Minus1)?;
        Ok(probs.squeeze(0)?.to_vec1::<f32>()?)
    }
}

impl SentimentModel for ModernBertSentimentModel {
    fn predict(&self, text: &str) -> Result<RawPrediction, ClassifierError> {
        let probs = self.forward_probs(text)?;
        let (pred_id, score) = probs
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .ok_or_else(|| ClassifierError::ModelLoad("model returned no logits".to_string()))?;

        Ok(RawPrediction {
            label: self.label_for(pred_id as u32)?,
            score: f64::from(*score),
        })
    }

    fn predict_scores(&self, text: &str) -> Result<Vec<RawPrediction>, ClassifierError> {
        let probs = self.forward_probs(text)?;
        probs
            .iter()
            .enumerate()
            .map(|(id, score)| {
                Ok(RawPrediction {
                    label: self.label_for(id as u32)?,
                    score: f64::from(*score),
                })
            })
            .collect()
    }
}

/// Candle's ModernBERT config expects a nested classifier config that
/// most hub checkpoints omit; synthesize one sized to the real label
/// count so the classification head loads with the right shape.
fn patch_classifier_config(config: &mut Config, num_labels: usize) {
    let already_sized = config
        .classifier_config
        .as_ref()
        .is_some_and(|c| c.id2label.len() == num_labels);
    if already_sized {
        return;
    }

    let id2label: HashMap<String, String> = (0..num_labels)
        .map(|i| (i.to_string(), format!("label_{i}")))
        .collect();
    let label2id: HashMap<String, String> = id2label
        .iter()
        .map(|(k, v)| (v.clone(), k.clone()))
        .collect();

    config.classifier_config = Some(ClassifierConfig {
        id2label,
        label2id,
        classifier_pooling: ClassifierPooling::default(),
    });
}

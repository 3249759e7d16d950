//! 請求書入力フォームと検証
//!
//! 検証は純粋関数 `InvoiceForm::validate` に集約し、
//! 入力変更時（項目単位）と保存時（全項目）の両方で同じ規則を使う。

use std::collections::BTreeMap;

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::notify::{BilingualText, Notification};
use crate::vendor::VendorSuggestions;

lazy_static! {
    /// 整数、または小数点以下1〜2桁（ASCII数字のみ）
    static ref PRICE_PATTERN: Regex = Regex::new(r"^[0-9]+(\.[0-9]{1,2})?$").unwrap();
}

/// フォーム項目
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Date,
    InvoiceNumber,
    Vendor,
    ItemNumber,
    Description,
    Price,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Date,
        Field::InvoiceNumber,
        Field::Vendor,
        Field::ItemNumber,
        Field::Description,
        Field::Price,
    ];

    /// 入力要素の name 属性
    pub fn name(&self) -> &'static str {
        match self {
            Field::Date => "date",
            Field::InvoiceNumber => "invoiceNumber",
            Field::Vendor => "vendor",
            Field::ItemNumber => "itemNumber",
            Field::Description => "description",
            Field::Price => "price",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn label(&self) -> BilingualText {
        match self {
            Field::Date => BilingualText::new("Date", "التاريخ"),
            Field::InvoiceNumber => BilingualText::new("Invoice #", "رقم الفاتورة"),
            Field::Vendor => BilingualText::new("Vendor", "المورّد"),
            Field::ItemNumber => BilingualText::new("Item #", "رقم الصنف"),
            Field::Description => BilingualText::new("Description", "الوصف"),
            Field::Price => BilingualText::new("Price", "السعر"),
        }
    }
}

/// 違反した規則
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    PriceFormat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: Field,
    pub rule: Rule,
}

impl Violation {
    pub fn message(&self) -> BilingualText {
        match (self.field, self.rule) {
            (Field::Date, Rule::Required) => BilingualText::new("Date is required", "التاريخ مطلوب"),
            (Field::InvoiceNumber, Rule::Required) => {
                BilingualText::new("Invoice number is required", "رقم الفاتورة مطلوب")
            }
            (Field::Vendor, Rule::Required) => BilingualText::new("Vendor is required", "المورّد مطلوب"),
            (Field::Price, Rule::Required) => BilingualText::new("Price is required", "السعر مطلوب"),
            (_, Rule::PriceFormat) => {
                BilingualText::new("Invalid price format", "صيغة سعر غير صالحة")
            }
            (field, Rule::Required) => {
                let label = field.label();
                BilingualText::new(format!("{} is required", label.en), format!("{} مطلوب", label.ar))
            }
        }
    }

    pub fn to_notification(&self) -> Notification {
        Notification::error("Validation Error", self.message().to_string())
    }
}

/// 価格文字列の形式チェック
pub fn is_valid_price(value: &str) -> bool {
    PRICE_PATTERN.is_match(value)
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// 請求書フォームの値
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoiceForm {
    pub date: Option<NaiveDate>,
    pub invoice_number: String,
    pub vendor: String,
    pub item_number: String,
    pub description: String,
    pub price: String,
}

impl InvoiceForm {
    /// 1項目の検証
    pub fn validate_field(&self, field: Field) -> Option<Violation> {
        let rule = match field {
            Field::Date => self.date.is_none().then_some(Rule::Required),
            Field::InvoiceNumber => is_blank(&self.invoice_number).then_some(Rule::Required),
            Field::Vendor => is_blank(&self.vendor).then_some(Rule::Required),
            Field::Price => {
                if self.price.is_empty() {
                    Some(Rule::Required)
                } else if !is_valid_price(&self.price) {
                    Some(Rule::PriceFormat)
                } else {
                    None
                }
            }
            Field::ItemNumber | Field::Description => None,
        };
        rule.map(|rule| Violation { field, rule })
    }

    /// 全項目の検証（項目順）
    pub fn validate(&self) -> Vec<Violation> {
        Field::ALL
            .into_iter()
            .filter_map(|f| self.validate_field(f))
            .collect()
    }

    /// テキスト項目の値（日付は `YYYY-MM-DD`）
    pub fn value(&self, field: Field) -> String {
        match field {
            Field::Date => self
                .date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            Field::InvoiceNumber => self.invoice_number.clone(),
            Field::Vendor => self.vendor.clone(),
            Field::ItemNumber => self.item_number.clone(),
            Field::Description => self.description.clone(),
            Field::Price => self.price.clone(),
        }
    }

    /// テキスト項目を設定。日付は `YYYY-MM-DD` を解釈し、不正なら未入力扱い
    pub fn set_value(&mut self, field: Field, value: &str) {
        match field {
            Field::Date => self.date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok(),
            Field::InvoiceNumber => self.invoice_number = value.to_string(),
            Field::Vendor => self.vendor = value.to_string(),
            Field::ItemNumber => self.item_number = value.to_string(),
            Field::Description => self.description = value.to_string(),
            Field::Price => self.price = value.to_string(),
        }
    }
}

/// 項目別エラー
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, Violation>);

impl FieldErrors {
    /// 項目の検証結果を反映（`None` ならエラーを消す）
    pub fn apply(&mut self, field: Field, violation: Option<Violation>) {
        match violation {
            Some(v) => {
                self.0.insert(field, v);
            }
            None => {
                self.0.remove(&field);
            }
        }
    }

    pub fn replace_all(&mut self, violations: &[Violation]) {
        self.0 = violations.iter().map(|v| (v.field, v.clone())).collect();
    }

    pub fn get(&self, field: Field) -> Option<&Violation> {
        self.0.get(&field)
    }

    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|v| v.message().to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// 保存操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveAction {
    /// 保存して同じ書類に留まる
    Save,
    /// 保存してフォームを空にし、次の書類へ
    SaveAndNext,
}

impl SaveAction {
    /// キーボードショートカット（Ctrl+S / Ctrl+Enter）
    pub fn from_shortcut(ctrl: bool, key: &str) -> Option<SaveAction> {
        if !ctrl {
            return None;
        }
        match key {
            "s" | "S" => Some(SaveAction::Save),
            "Enter" => Some(SaveAction::SaveAndNext),
            _ => None,
        }
    }
}

/// 保存結果
#[derive(Debug, Clone, PartialEq)]
pub struct SaveOutcome {
    pub notifications: Vec<Notification>,
    /// 保存された値（検証失敗時は `None`）
    pub saved: Option<InvoiceForm>,
    /// ビューアを次へ進めるか
    pub advance: bool,
}

/// 入力画面のフォーム状態
#[derive(Debug, Clone, Default)]
pub struct InvoiceEntry {
    form: InvoiceForm,
    errors: FieldErrors,
    vendors: VendorSuggestions,
}

impl InvoiceEntry {
    pub fn new(vendor_pool: Vec<String>) -> Self {
        Self {
            vendors: VendorSuggestions::new(vendor_pool),
            ..Default::default()
        }
    }

    pub fn form(&self) -> &InvoiceForm {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn vendors(&self) -> &VendorSuggestions {
        &self.vendors
    }

    pub fn vendors_mut(&mut self) -> &mut VendorSuggestions {
        &mut self.vendors
    }

    pub fn set_vendor_pool(&mut self, pool: Vec<String>) {
        let current = self.form.vendor.clone();
        self.vendors.set_pool(pool, &current);
    }

    /// 入力変更。該当項目のみ再検証する
    pub fn set_value(&mut self, field: Field, value: &str) {
        self.form.set_value(field, value);
        self.errors.apply(field, self.form.validate_field(field));
        if field == Field::Vendor {
            self.vendors.on_input(value);
        }
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.form.date = date;
        self.errors.apply(Field::Date, self.form.validate_field(Field::Date));
    }

    /// 候補から取引先を選択
    pub fn select_vendor(&mut self, vendor: &str) {
        self.form.vendor = self.vendors.select(vendor);
        self.errors.apply(Field::Vendor, self.form.validate_field(Field::Vendor));
    }

    /// 保存
    ///
    /// 失敗時は違反1件ごとに通知を1つ返す。成功時は確認通知を返し、
    /// `SaveAndNext` ならフォームを空にして `advance` を立てる。
    pub fn submit(&mut self, action: SaveAction) -> SaveOutcome {
        let violations = self.form.validate();
        self.errors.replace_all(&violations);

        if !violations.is_empty() {
            tracing::debug!(count = violations.len(), "invoice validation failed");
            return SaveOutcome {
                notifications: violations.iter().map(Violation::to_notification).collect(),
                saved: None,
                advance: false,
            };
        }

        let saved = self.form.clone();
        tracing::info!(invoice_number = %saved.invoice_number, vendor = %saved.vendor, "invoice saved");
        let notification = Notification::info(
            "Form Saved",
            BilingualText::new(
                format!("Invoice #{} saved successfully", saved.invoice_number),
                "تم حفظ الفاتورة بنجاح",
            )
            .to_string(),
        );

        let advance = action == SaveAction::SaveAndNext;
        if advance {
            self.reset();
        }
        SaveOutcome {
            notifications: vec![notification],
            saved: Some(saved),
            advance,
        }
    }

    /// フォームを空に戻す（取引先リストは保持）
    pub fn reset(&mut self) {
        self.form = InvoiceForm::default();
        self.errors.clear();
        self.vendors.hide();
    }
}

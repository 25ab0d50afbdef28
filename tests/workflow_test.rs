use anyhow::{anyhow, Result};
use siyuan_auto_space::models::{BlockInfo, DocTreeNode, Notebook};
use siyuan_auto_space::orchestrator::{body_processor, collect, title_processor};
use siyuan_auto_space::{Config, NoteApi};
use std::collections::HashMap;
use std::sync::Mutex;

/// 模拟思源 API 的测试替身，记录每一次变更调用
#[derive(Default)]
struct FakeApi {
    notebooks: Vec<Notebook>,
    trees: HashMap<String, Vec<DocTreeNode>>,
    block_infos: HashMap<String, BlockInfo>,
    auto_space_calls: Mutex<Vec<String>>,
    rename_calls: Mutex<Vec<(String, String, String)>>,
}

impl NoteApi for FakeApi {
    async fn ls_notebooks(&self) -> Result<Vec<Notebook>> {
        Ok(self.notebooks.clone())
    }

    async fn list_doc_tree(&self, notebook_id: &str) -> Result<Vec<DocTreeNode>> {
        self.trees
            .get(notebook_id)
            .cloned()
            .ok_or_else(|| anyhow!("文档树获取失败: {}", notebook_id))
    }

    async fn block_info(&self, doc_id: &str) -> Result<BlockInfo> {
        self.block_infos
            .get(doc_id)
            .cloned()
            .ok_or_else(|| anyhow!("文档不存在: {}", doc_id))
    }

    async fn auto_space(&self, doc_id: &str) -> Result<()> {
        self.auto_space_calls.lock().unwrap().push(doc_id.to_string());
        Ok(())
    }

    async fn rename_doc(&self, notebook_id: &str, path: &str, title: &str) -> Result<()> {
        self.rename_calls.lock().unwrap().push((
            notebook_id.to_string(),
            path.to_string(),
            title.to_string(),
        ));
        Ok(())
    }
}

fn notebook(id: &str, name: &str) -> Notebook {
    Notebook {
        id: id.to_string(),
        name: name.to_string(),
    }
}

fn node(id: &str, children: Vec<DocTreeNode>) -> DocTreeNode {
    DocTreeNode {
        id: id.to_string(),
        children: if children.is_empty() { None } else { Some(children) },
    }
}

fn block_info(box_id: &str, path: &str, title: &str) -> BlockInfo {
    BlockInfo {
        box_id: Some(box_id.to_string()),
        path: Some(path.to_string()),
        root_title: Some(title.to_string()),
    }
}

/// 测试配置：暂停时间设为 0，避免拖慢测试
fn test_config() -> Config {
    Config {
        pause_secs: 0,
        ..Config::default()
    }
}

#[tokio::test]
async fn test_body_flow_three_node_chain() {
    // 一个笔记本，根 -> 子 -> 孙 的三层线性文档链
    let mut api = FakeApi::default();
    api.notebooks = vec![notebook("nb1", "工作笔记")];
    api.trees.insert(
        "nb1".to_string(),
        vec![node("root", vec![node("child", vec![node("grand", vec![])])])],
    );

    body_processor::run(&api, &test_config()).await.unwrap();

    let calls = api.auto_space_calls.lock().unwrap();
    assert_eq!(*calls, vec!["root", "child", "grand"]);
}

#[tokio::test]
async fn test_collect_dedups_across_notebooks() {
    let mut api = FakeApi::default();
    api.notebooks = vec![notebook("nb1", "甲"), notebook("nb2", "乙")];
    api.trees.insert(
        "nb1".to_string(),
        vec![node("shared", vec![]), node("only1", vec![])],
    );
    api.trees.insert(
        "nb2".to_string(),
        vec![node("shared", vec![]), node("only2", vec![])],
    );

    let ids = collect::collect_document_ids(&api).await.unwrap();

    assert_eq!(ids, vec!["shared", "only1", "only2"]);
}

#[tokio::test]
async fn test_collect_skips_failing_notebook() {
    // nb_bad 没有对应的文档树，拉取会失败，但不应影响 nb_ok
    let mut api = FakeApi::default();
    api.notebooks = vec![notebook("nb_bad", "坏"), notebook("nb_ok", "好")];
    api.trees.insert("nb_ok".to_string(), vec![node("d1", vec![])]);

    let ids = collect::collect_document_ids(&api).await.unwrap();

    assert_eq!(ids, vec!["d1"]);
}

#[tokio::test]
async fn test_collect_no_notebooks() {
    let api = FakeApi::default();
    let ids = collect::collect_document_ids(&api).await.unwrap();
    assert!(ids.is_empty());
}

#[tokio::test]
async fn test_title_flow_renames_with_optimized_title() {
    let mut api = FakeApi::default();
    api.notebooks = vec![notebook("nb1", "生活")];
    api.trees.insert("nb1".to_string(), vec![node("d1", vec![])]);
    api.block_infos
        .insert("d1".to_string(), block_info("nb1", "/d1.sy", "我有5个苹果"));

    title_processor::run(&api, &test_config()).await.unwrap();

    let calls = api.rename_calls.lock().unwrap();
    assert_eq!(
        *calls,
        vec![(
            "nb1".to_string(),
            "/d1.sy".to_string(),
            "我有 5 个苹果".to_string()
        )]
    );
}

#[tokio::test]
async fn test_title_flow_skips_already_normalized() {
    let mut api = FakeApi::default();
    api.notebooks = vec![notebook("nb1", "生活")];
    api.trees.insert("nb1".to_string(), vec![node("d1", vec![])]);
    api.block_infos
        .insert("d1".to_string(), block_info("nb1", "/d1.sy", "我有 5 个苹果"));

    title_processor::run(&api, &test_config()).await.unwrap();

    assert!(api.rename_calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_title_flow_excludes_incomplete_detail() {
    let mut api = FakeApi::default();
    api.notebooks = vec![notebook("nb1", "生活")];
    api.trees.insert(
        "nb1".to_string(),
        vec![node("d1", vec![]), node("d2", vec![])],
    );
    // d1 缺少 rootTitle，d2 正常
    api.block_infos.insert(
        "d1".to_string(),
        BlockInfo {
            box_id: Some("nb1".to_string()),
            path: Some("/d1.sy".to_string()),
            root_title: None,
        },
    );
    api.block_infos
        .insert("d2".to_string(), block_info("nb1", "/d2.sy", "学Rust笔记"));

    title_processor::run(&api, &test_config()).await.unwrap();

    let calls = api.rename_calls.lock().unwrap();
    assert_eq!(
        *calls,
        vec![(
            "nb1".to_string(),
            "/d2.sy".to_string(),
            "学 Rust 笔记".to_string()
        )]
    );
}

#[tokio::test]
async fn test_title_flow_skips_failing_block_info() {
    // d1 的详情查询直接失败，流程继续处理 d2
    let mut api = FakeApi::default();
    api.notebooks = vec![notebook("nb1", "生活")];
    api.trees.insert(
        "nb1".to_string(),
        vec![node("d1", vec![]), node("d2", vec![])],
    );
    api.block_infos
        .insert("d2".to_string(), block_info("nb1", "/d2.sy", "从0到10000粉丝"));

    title_processor::run(&api, &test_config()).await.unwrap();

    let calls = api.rename_calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].2, "从 0 到 10000 粉丝");
}

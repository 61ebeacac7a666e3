//! Built-in stubs.
//!
//! One stub per [`TemplateId`]. Placeholders use `{{ KEY }}` and are filled
//! by [`crudsmith_core::domain::TokenMap::render`]. Vue interpolations such
//! as `{{ item.id }}` are left alone because no token has that key.

use crudsmith_core::domain::TemplateId;

/// Stub source for a template id.
pub fn builtin_stub(id: TemplateId) -> &'static str {
    match id {
        TemplateId::Model => MODEL,
        TemplateId::Controller => CONTROLLER,
        TemplateId::StoreRequest => STORE_REQUEST,
        TemplateId::UpdateRequest => UPDATE_REQUEST,
        TemplateId::Resource => RESOURCE,
        TemplateId::Migration => MIGRATION,
        TemplateId::IndexView => VIEW_INDEX,
        TemplateId::CreateView => VIEW_CREATE,
        TemplateId::EditView => VIEW_EDIT,
        TemplateId::FormView => VIEW_FORM,
    }
}

// ── Backend ───────────────────────────────────────────────────────────────────

pub const MODEL: &str = r"<?php

declare(strict_types=1);

namespace {{ NAMESPACE }};

use Illuminate\Database\Eloquent\Factories\HasFactory;
use Illuminate\Database\Eloquent\Model;{{ SOFT_DELETES_IMPORT }}{{ AUDITABLE_IMPORT }}

class {{ CLASS }} extends Model{{ AUDITABLE_INTERFACE }}
{
    use HasFactory{{ SOFT_DELETES_TRAIT }}{{ AUDITABLE_TRAIT }};

    {{ TABLE_PROPERTY }}/**
     * The attributes that are mass assignable.
     *
     * @var list<string>
     */
    protected $fillable = [
        {{ FILLABLE }},
    ];

    /**
     * Get the attributes that should be cast.
     *
     * @return array<string, string>
     */
    protected function casts(): array
    {
        return [
            {{ CASTS }}
        ];
    }
{{ RELATIONSHIPS }}}
";

pub const CONTROLLER: &str = r"<?php

declare(strict_types=1);

namespace {{ NAMESPACE }};

use {{ MODEL_NAMESPACE }}\{{ MODEL }};
use {{ REQUEST_NAMESPACE }}\Store{{ MODEL }}Request;
use {{ REQUEST_NAMESPACE }}\Update{{ MODEL }}Request;
use {{ RESOURCE_NAMESPACE }}\{{ MODEL }}Resource;
use Illuminate\Http\RedirectResponse;
use Illuminate\Http\Request;
use Inertia\Inertia;
use Inertia\Response;
use Spatie\QueryBuilder\QueryBuilder;

class {{ CLASS }} extends Controller
{
    public function index(Request $request): Response
    {
        ${{ MODEL_VARIABLE_PLURAL }} = QueryBuilder::for({{ MODEL }}::class)
            ->allowedFilters([{{ ALLOWED_FILTERS }}])
            ->allowedSorts([{{ ALLOWED_SORTS }}]){{ EAGER_LOAD }}
            ->paginate($request->integer('per_page', 15))
            ->withQueryString();

        return Inertia::render('{{ VUE_DIRECTORY }}/Index', [
            '{{ MODEL_VARIABLE_PLURAL }}' => {{ MODEL }}Resource::collection(${{ MODEL_VARIABLE_PLURAL }}),
            'filters' => $request->only(['filter', 'sort']),
        ]);
    }

    public function create(): Response
    {
        return Inertia::render('{{ VUE_DIRECTORY }}/Create');
    }

    public function store(Store{{ MODEL }}Request $request): RedirectResponse
    {
        {{ MODEL }}::create($request->validated());

        return redirect()
            ->route('{{ ROUTE_NAME }}.index')
            ->with('success', '{{ MODEL }} created.');
    }

    public function show({{ MODEL }} ${{ MODEL_VARIABLE }}): Response
    {
        return Inertia::render('{{ VUE_DIRECTORY }}/Show', [
            '{{ MODEL_VARIABLE }}' => new {{ MODEL }}Resource(${{ MODEL_VARIABLE }}{{ EAGER_LOAD_SHOW }}),
        ]);
    }

    public function edit({{ MODEL }} ${{ MODEL_VARIABLE }}): Response
    {
        return Inertia::render('{{ VUE_DIRECTORY }}/Edit', [
            '{{ MODEL_VARIABLE }}' => new {{ MODEL }}Resource(${{ MODEL_VARIABLE }}{{ EAGER_LOAD_EDIT }}),
        ]);
    }

    public function update(Update{{ MODEL }}Request $request, {{ MODEL }} ${{ MODEL_VARIABLE }}): RedirectResponse
    {
        ${{ MODEL_VARIABLE }}->update($request->validated());

        return redirect()
            ->route('{{ ROUTE_NAME }}.index')
            ->with('success', '{{ MODEL }} updated.');
    }

    public function destroy({{ MODEL }} ${{ MODEL_VARIABLE }}): RedirectResponse
    {
        ${{ MODEL_VARIABLE }}->delete();

        return redirect()
            ->route('{{ ROUTE_NAME }}.index')
            ->with('success', '{{ MODEL }} deleted.');
    }
}
";

pub const STORE_REQUEST: &str = r"<?php

declare(strict_types=1);

namespace {{ NAMESPACE }};

use Illuminate\Foundation\Http\FormRequest;

class {{ CLASS }} extends FormRequest
{
    public function authorize(): bool
    {
        return true;
    }

    /**
     * @return array<string, array<int, mixed>>
     */
    public function rules(): array
    {
        return [
            {{ VALIDATION_RULES }}
        ];
    }

    /**
     * @return array<string, string>
     */
    public function attributes(): array
    {
        return [
            {{ ATTRIBUTES }}
        ];
    }
}
";

pub const UPDATE_REQUEST: &str = r"<?php

declare(strict_types=1);

namespace {{ NAMESPACE }};

use Illuminate\Foundation\Http\FormRequest;
use Illuminate\Validation\Rule;

class {{ CLASS }} extends FormRequest
{
    public function authorize(): bool
    {
        return true;
    }

    /**
     * @return array<string, array<int, mixed>>
     */
    public function rules(): array
    {
        return [
            {{ VALIDATION_RULES }}
        ];
    }

    /**
     * @return array<string, string>
     */
    public function attributes(): array
    {
        return [
            {{ ATTRIBUTES }}
        ];
    }
}
";

pub const RESOURCE: &str = r"<?php

declare(strict_types=1);

namespace {{ NAMESPACE }};

use Illuminate\Http\Request;
use Illuminate\Http\Resources\Json\JsonResource;

class {{ CLASS }} extends JsonResource
{
    /**
     * @return array<string, mixed>
     */
    public function toArray(Request $request): array
    {
        return [
            'id' => $this->id,
            {{ RESOURCE_FIELDS }}
            'created_at' => $this->created_at?->toISOString(),
            'updated_at' => $this->updated_at?->toISOString(),{{ SOFT_DELETE_FIELD }}
        ];
    }
}
";

pub const MIGRATION: &str = r"<?php

declare(strict_types=1);

use Illuminate\Database\Migrations\Migration;
use Illuminate\Database\Schema\Blueprint;
use Illuminate\Support\Facades\Schema;

return new class extends Migration
{
    public function up(): void
    {
        Schema::create('{{ TABLE }}', function (Blueprint $table) {
            $table->id();
            {{ COLUMNS }}
            $table->timestamps();{{ SOFT_DELETES }}{{ INDEXES }}
        });
    }

    public function down(): void
    {
        Schema::dropIfExists('{{ TABLE }}');
    }
};
";

// ── Views ─────────────────────────────────────────────────────────────────────

pub const VIEW_INDEX: &str = r#"<script setup lang="ts">
import { Head, Link, router } from '@inertiajs/vue3';
import { Button } from '@/components/ui/button';
import {
    Table,
    TableBody,
    TableCell,
    TableHead,
    TableHeader,
    TableRow,
} from '@/components/ui/table';

interface {{ MODEL }} {
  id: number;
  {{ TYPE_INTERFACE_FIELDS }}
  created_at: string;
  updated_at: string;
}

interface Paginated<T> {
  data: T[];
  links: { url: string | null; label: string; active: boolean }[];
}

const props = defineProps<{
  {{ MODEL_VARIABLE_PLURAL }}: Paginated<{{ MODEL }}>;
}>();

function destroy(id: number) {
    if (confirm('Delete this record?')) {
        router.delete(route('{{ ROUTE_NAME }}.destroy', id));
    }
}
</script>

<template>
    <Head title="{{ MODEL_PLURAL }}" />

    <div class="space-y-4 p-6">
        <div class="flex items-center justify-between">
            <h1 class="text-2xl font-semibold">{{ MODEL_PLURAL }}</h1>
            <Button as-child>
                <Link :href="route('{{ ROUTE_NAME }}.create')">New {{ MODEL }}</Link>
            </Button>
        </div>

        <Table>
            <TableHeader>
                <TableRow>
                    <TableHead>ID</TableHead>
                    {{ TABLE_HEADERS }}
                    <TableHead />
                </TableRow>
            </TableHeader>
            <TableBody>
                <TableRow v-for="item in props.{{ MODEL_VARIABLE_PLURAL }}.data" :key="item.id">
                    <TableCell>{{ item.id }}</TableCell>
                    {{ TABLE_CELLS }}
                    <TableCell class="space-x-2 text-right">
                        <Link :href="route('{{ ROUTE_NAME }}.edit', item.id)">Edit</Link>
                        <button type="button" @click="destroy(item.id)">Delete</button>
                    </TableCell>
                </TableRow>
            </TableBody>
        </Table>
    </div>
</template>
"#;

pub const VIEW_CREATE: &str = r#"<script setup lang="ts">
import { Head, useForm } from '@inertiajs/vue3';
import {{ MODEL }}Form from './Form.vue';

interface {{ MODEL }}FormData {
  {{ FORM_INTERFACE_FIELDS }}
}

const form = useForm<{{ MODEL }}FormData>({
  {{ FORM_INITIAL_VALUES }}
});

function submit() {
    form.post(route('{{ ROUTE_NAME }}.store'));
}
</script>

<template>
    <Head title="Create {{ MODEL }}" />

    <div class="max-w-2xl p-6">
        <h1 class="mb-6 text-2xl font-semibold">Create {{ MODEL }}</h1>
        <{{ MODEL }}Form :form="form" submit-label="Create" @submit="submit" />
    </div>
</template>
"#;

pub const VIEW_EDIT: &str = r#"<script setup lang="ts">
import { Head, useForm } from '@inertiajs/vue3';
import {{ MODEL }}Form from './Form.vue';

interface {{ MODEL }} {
  id: number;
  {{ TYPE_INTERFACE_FIELDS }}
}

interface {{ MODEL }}FormData {
  {{ FORM_INTERFACE_FIELDS }}
}

const props = defineProps<{
  {{ MODEL_VARIABLE }}: {{ MODEL }};
}>();

const form = useForm<{{ MODEL }}FormData>({
  {{ FORM_EDIT_VALUES }}
});

function submit() {
    form.put(route('{{ ROUTE_NAME }}.update', props.{{ MODEL_VARIABLE }}.id));
}
</script>

<template>
    <Head title="Edit {{ MODEL }}" />

    <div class="max-w-2xl p-6">
        <h1 class="mb-6 text-2xl font-semibold">Edit {{ MODEL }}</h1>
        <{{ MODEL }}Form :form="form" submit-label="Save" @submit="submit" />
    </div>
</template>
"#;

pub const VIEW_FORM: &str = r#"<script setup lang="ts">
import type { InertiaForm } from '@inertiajs/vue3';
import { Link } from '@inertiajs/vue3';
import InputError from '@/components/InputError.vue';
import { Button } from '@/components/ui/button';
import { Checkbox } from '@/components/ui/checkbox';
import { Input } from '@/components/ui/input';
import { Label } from '@/components/ui/label';
import { Textarea } from '@/components/ui/textarea';

interface {{ MODEL }}FormData {
  {{ FORM_INTERFACE_FIELDS }}
}

defineProps<{
  form: InertiaForm<{{ MODEL }}FormData>;
  submitLabel: string;
}>();

defineEmits<{ submit: [] }>();
</script>

<template>
    <form class="space-y-6" @submit.prevent="$emit('submit')">
{{ FORM_FIELDS }}

        <div class="flex items-center gap-4">
            <Button type="submit" :disabled="form.processing">{{ submitLabel }}</Button>
            <Link :href="route('{{ ROUTE_NAME }}.index')">Cancel</Link>
        </div>
    </form>
</template>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crudsmith_core::domain::TokenMap;

    #[test]
    fn every_id_has_a_stub() {
        for id in TemplateId::ALL {
            assert!(!builtin_stub(id).is_empty(), "{id}");
        }
    }

    #[test]
    fn vue_interpolations_survive_rendering() {
        let out = TokenMap::new()
            .with("MODEL", "Product")
            .with("ROUTE_NAME", "products")
            .render(VIEW_FORM);
        assert!(out.contains("{{ submitLabel }}"));
        assert!(out.contains("route('products.index')"));
        assert!(!out.contains("{{ MODEL }}"));
    }
}
